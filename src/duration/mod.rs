pub mod clock;
pub mod pretty;
pub mod relative;

pub use clock::{ms_to_24_hour, MinuteRounding, MS_PER_DAY};
pub use pretty::{ms_to_duration, ms_to_media, DurationParts, DEFAULT_MAX_UNITS};
pub use relative::{pretty_relative_time, pretty_relative_time_from, Moment, TimeError};
