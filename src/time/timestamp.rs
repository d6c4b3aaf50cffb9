use chrono::{DateTime, Utc};

use super::date::{
    date_to_date_str, date_to_date_str_utc, date_to_date_time, date_to_date_time_utc,
    date_to_time, date_to_time_utc, TimeOptions,
};
use crate::duration::TimeError;

/// Epoch milliseconds to a UTC date-time.
pub fn timestamp_to_datetime(timestamp: i64) -> Result<DateTime<Utc>, TimeError> {
    DateTime::from_timestamp_millis(timestamp).ok_or(TimeError::OutOfRange(timestamp))
}

// Timestamps chrono cannot represent render as "", like a missing date.

pub fn timestamp_to_date(timestamp: i64) -> String {
    date_to_date_str(timestamp_to_datetime(timestamp).ok().as_ref())
}

pub fn timestamp_to_date_utc(timestamp: i64) -> String {
    date_to_date_str_utc(timestamp_to_datetime(timestamp).ok().as_ref())
}

pub fn timestamp_to_time(timestamp: i64, options: TimeOptions) -> String {
    date_to_time(timestamp_to_datetime(timestamp).ok().as_ref(), options)
}

pub fn timestamp_to_time_utc(timestamp: i64, options: TimeOptions) -> String {
    date_to_time_utc(timestamp_to_datetime(timestamp).ok().as_ref(), options)
}

pub fn timestamp_to_date_time(timestamp: i64, options: TimeOptions) -> String {
    date_to_date_time(timestamp_to_datetime(timestamp).ok().as_ref(), options)
}

pub fn timestamp_to_date_time_utc(timestamp: i64, options: TimeOptions) -> String {
    date_to_date_time_utc(timestamp_to_datetime(timestamp).ok().as_ref(), options)
}
