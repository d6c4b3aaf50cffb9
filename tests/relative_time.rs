use chrono::{TimeZone, Utc};
use format_utils::duration::{pretty_relative_time, pretty_relative_time_from, Moment, TimeError};

const NOW: i64 = 1_679_051_024_444;
const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const YEAR: i64 = 365 * DAY;

fn ago(ms: i64) -> String {
    pretty_relative_time_from(NOW - ms, NOW).unwrap()
}

fn ahead(ms: i64) -> String {
    pretty_relative_time_from(NOW + ms, NOW).unwrap()
}

#[test]
fn golden_seconds_ago() {
    assert_eq!(ago(50_000), "50 seconds ago");
}

#[test]
fn just_now_within_thirty_seconds() {
    assert_eq!(ago(0), "just now");
    assert_eq!(ago(30 * SECOND), "just now");
    assert_eq!(ahead(10 * SECOND), "just now");
    assert_eq!(ago(31 * SECOND), "31 seconds ago");
}

#[test]
fn past_buckets() {
    assert_eq!(ago(MINUTE), "a minute ago");
    assert_eq!(ago(5 * MINUTE), "5 minutes ago");
    assert_eq!(ago(HOUR), "an hour ago");
    assert_eq!(ago(3 * HOUR), "3 hours ago");
    assert_eq!(ago(DAY), "a day ago");
    assert_eq!(ago(2 * DAY), "2 days ago");
    assert_eq!(ago(7 * DAY), "a week ago");
    assert_eq!(ago(21 * DAY), "3 weeks ago");
    assert_eq!(ago(30 * DAY), "a month ago");
    assert_eq!(ago(90 * DAY), "3 months ago");
    assert_eq!(ago(YEAR), "a year ago");
    assert_eq!(ago(10 * YEAR), "10 years ago");
    assert_eq!(ago(100 * YEAR), "a century ago");
    assert_eq!(ago(300 * YEAR), "3 centuries ago");
    assert_eq!(ago(1000 * YEAR), "a millennium ago");
    assert_eq!(ago(4000 * YEAR), "4 millennia ago");
}

#[test]
fn future_buckets() {
    assert_eq!(ahead(MINUTE), "in a minute");
    assert_eq!(ahead(45 * MINUTE), "in 45 minutes");
    assert_eq!(ahead(HOUR), "in an hour");
    assert_eq!(ahead(2 * YEAR), "in 2 years");
}

#[test]
fn rounds_within_bucket() {
    assert_eq!(ago(90 * MINUTE), "2 hours ago");
    assert_eq!(ago(89 * MINUTE), "an hour ago");
}

#[test]
fn accepts_dates_and_iso_strings() {
    let then = Utc.timestamp_millis_opt(NOW - 2 * DAY).unwrap();
    let now = Utc.timestamp_millis_opt(NOW).unwrap();

    assert_eq!(pretty_relative_time_from(then, now).unwrap(), "2 days ago");
    assert_eq!(
        pretty_relative_time_from("2023-03-15T11:03:44.444Z", "2023-03-17T11:03:44.444Z").unwrap(),
        "2 days ago"
    );
    assert_eq!(
        pretty_relative_time_from("2023-03-17", "2023-03-14").unwrap(),
        "in 3 days"
    );
    assert_eq!(
        pretty_relative_time_from(Moment::Millis(NOW), "2023-03-17T11:04:44.444+00:00").unwrap(),
        "a minute ago"
    );
}

#[test]
fn rejects_unparseable_strings() {
    assert_eq!(
        pretty_relative_time_from("not a date", NOW),
        Err(TimeError::InvalidTimestamp("not a date".to_string()))
    );
}

#[test]
fn defaults_to_now() {
    let an_hour_ago = Utc::now().timestamp_millis() - HOUR;
    assert_eq!(pretty_relative_time(an_hour_ago).unwrap(), "an hour ago");
}
