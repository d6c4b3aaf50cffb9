use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOptions {
    /// Include the seconds component.
    pub secs: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self { secs: true }
    }
}

impl TimeOptions {
    pub fn without_secs() -> Self {
        Self { secs: false }
    }
}

fn date_str<D: Datelike>(d: &D) -> String {
    format!("{}-{:02}-{:02}", d.year(), d.month(), d.day())
}

fn time_str<T: Timelike>(t: &T, options: TimeOptions) -> String {
    if options.secs {
        format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
    } else {
        format!("{:02}:{:02}", t.hour(), t.minute())
    }
}

fn day_month_str<D: Datelike>(d: &D) -> String {
    format!("{:02} {}", d.day(), SHORT_MONTHS[d.month0() as usize])
}

/// `"2023-03-17"` in the local time zone; `None` gives `""`.
pub fn date_to_date_str(d: Option<&DateTime<Utc>>) -> String {
    d.map(|d| date_str(&d.with_timezone(&Local))).unwrap_or_default()
}

/// `"2023-03-17"` in UTC; `None` gives `""`.
pub fn date_to_date_str_utc(d: Option<&DateTime<Utc>>) -> String {
    d.map(date_str).unwrap_or_default()
}

/// `"11:03:44"`, or `"11:03"` without seconds, in the local time zone.
pub fn date_to_time(d: Option<&DateTime<Utc>>, options: TimeOptions) -> String {
    d.map(|d| time_str(&d.with_timezone(&Local), options))
        .unwrap_or_default()
}

/// `"11:03:44"`, or `"11:03"` without seconds, in UTC.
pub fn date_to_time_utc(d: Option<&DateTime<Utc>>, options: TimeOptions) -> String {
    d.map(|d| time_str(d, options)).unwrap_or_default()
}

/// `"2023-03-17 11:03:44"` in the local time zone.
pub fn date_to_date_time(d: Option<&DateTime<Utc>>, options: TimeOptions) -> String {
    d.map(|d| {
        let local = d.with_timezone(&Local);
        format!("{} {}", date_str(&local), time_str(&local, options))
    })
    .unwrap_or_default()
}

/// `"2023-03-17 11:03:44"` in UTC.
pub fn date_to_date_time_utc(d: Option<&DateTime<Utc>>, options: TimeOptions) -> String {
    d.map(|d| format!("{} {}", date_str(d), time_str(d, options)))
        .unwrap_or_default()
}

/// `"17 Mar"` in the local time zone.
pub fn date_to_day_month(d: Option<&DateTime<Utc>>) -> String {
    d.map(|d| day_month_str(&d.with_timezone(&Local)))
        .unwrap_or_default()
}

/// `"17 Mar"` in UTC.
pub fn date_to_day_month_utc(d: Option<&DateTime<Utc>>) -> String {
    d.map(day_month_str).unwrap_or_default()
}
