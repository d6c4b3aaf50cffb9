pub mod date;
pub mod timestamp;
pub mod wait;

pub use date::{
    date_to_date_str, date_to_date_str_utc, date_to_date_time, date_to_date_time_utc,
    date_to_day_month, date_to_day_month_utc, date_to_time, date_to_time_utc, TimeOptions,
};
pub use timestamp::{
    timestamp_to_date, timestamp_to_date_time, timestamp_to_date_time_utc, timestamp_to_date_utc,
    timestamp_to_datetime, timestamp_to_time, timestamp_to_time_utc,
};
pub use wait::wait;
