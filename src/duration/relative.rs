use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Unparseable timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
}

/// A point in time, as accepted by [`pretty_relative_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Moment {
    Date(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// An ISO-8601 date or date-time string.
    Text(String),
}

impl Moment {
    pub fn now() -> Self {
        Moment::Date(Utc::now())
    }

    pub fn to_millis(&self) -> Result<i64, TimeError> {
        match self {
            Moment::Date(d) => Ok(d.timestamp_millis()),
            Moment::Millis(ms) => Ok(*ms),
            Moment::Text(text) => parse_iso(text).map(|d| d.timestamp_millis()),
        }
    }
}

/// Offset-qualified strings are exact, bare dates are UTC midnight, and bare
/// date-times are local time.
fn parse_iso(text: &str) -> Result<DateTime<Utc>, TimeError> {
    let text = text.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(text) {
        return Ok(d.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Ok(local.with_timezone(&Utc));
            }
        }
    }
    debug!(text, "rejected timestamp string");
    Err(TimeError::InvalidTimestamp(text.to_string()))
}

impl From<DateTime<Utc>> for Moment {
    fn from(d: DateTime<Utc>) -> Self {
        Moment::Date(d)
    }
}

impl From<i64> for Moment {
    fn from(ms: i64) -> Self {
        Moment::Millis(ms)
    }
}

impl From<&str> for Moment {
    fn from(text: &str) -> Self {
        Moment::Text(text.to_string())
    }
}

impl From<String> for Moment {
    fn from(text: String) -> Self {
        Moment::Text(text)
    }
}

const SECOND: f64 = 1000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;
const CENTURY: f64 = 100.0 * YEAR;
const MILLENNIUM: f64 = 1000.0 * YEAR;

const JUST_NOW: f64 = 30.0 * SECOND;

struct Bucket {
    /// Exclusive upper bound on `|delta|`.
    below: f64,
    unit: f64,
    singular: &'static str,
    plural: &'static str,
}

const BUCKETS: [Bucket; 9] = [
    Bucket { below: MINUTE, unit: SECOND, singular: "a second", plural: "# seconds" },
    Bucket { below: HOUR, unit: MINUTE, singular: "a minute", plural: "# minutes" },
    Bucket { below: DAY, unit: HOUR, singular: "an hour", plural: "# hours" },
    Bucket { below: WEEK, unit: DAY, singular: "a day", plural: "# days" },
    Bucket { below: MONTH, unit: WEEK, singular: "a week", plural: "# weeks" },
    Bucket { below: YEAR, unit: MONTH, singular: "a month", plural: "# months" },
    Bucket { below: CENTURY, unit: YEAR, singular: "a year", plural: "# years" },
    Bucket { below: MILLENNIUM, unit: CENTURY, singular: "a century", plural: "# centuries" },
    Bucket { below: f64::INFINITY, unit: MILLENNIUM, singular: "a millennium", plural: "# millennia" },
];

/// Describe `timestamp` relative to the current time, e.g. `"5 minutes ago"`.
pub fn pretty_relative_time(timestamp: impl Into<Moment>) -> Result<String, TimeError> {
    pretty_relative_time_from(timestamp, Moment::now())
}

/// Describe `timestamp` relative to `relative_to`.
///
/// ```
/// use format_utils::duration::pretty_relative_time_from;
/// let now = 1_700_000_000_000_i64;
/// assert_eq!(pretty_relative_time_from(now - 50_000, now).unwrap(), "50 seconds ago");
/// assert_eq!(pretty_relative_time_from(now + 3_600_000, now).unwrap(), "in an hour");
/// ```
pub fn pretty_relative_time_from(
    timestamp: impl Into<Moment>,
    relative_to: impl Into<Moment>,
) -> Result<String, TimeError> {
    let then = timestamp.into().to_millis()?;
    let now = relative_to.into().to_millis()?;

    let delta = now.saturating_sub(then);
    let magnitude = delta.unsigned_abs() as f64;

    if magnitude <= JUST_NOW {
        return Ok("just now".to_string());
    }

    let bucket = BUCKETS
        .iter()
        .find(|b| magnitude < b.below)
        .unwrap_or(&BUCKETS[BUCKETS.len() - 1]);

    let count = (magnitude / bucket.unit).round();
    let phrase = if count <= 1.0 {
        bucket.singular.to_string()
    } else {
        bucket.plural.replace('#', &format!("{count}"))
    };

    Ok(if delta > 0 {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    })
}
