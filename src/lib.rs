//! Pure, stateless formatting and data helpers.
//!
//! `format-utils` provides deep merge and structural comparison over plain
//! data trees, significant-figure and byte-size formatting, duration and
//! relative-time phrasing, list deduplication, date formatting and colour
//! contrast selection. Apart from `time::wait` and the clock used for
//! relative times, every function is a pure transformation of its inputs.

pub mod colour;
pub mod duration;
pub mod list;
pub mod number;
pub mod object;
pub mod time;
