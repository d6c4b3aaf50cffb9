use serde::{Deserialize, Serialize};

pub const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;

/// How the minute component is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinuteRounding {
    #[default]
    Nearest,
    Up,
    Down,
}

impl MinuteRounding {
    fn apply(self, minutes: f64) -> f64 {
        match self {
            MinuteRounding::Nearest => minutes.round(),
            MinuteRounding::Up => minutes.ceil(),
            MinuteRounding::Down => minutes.floor(),
        }
    }
}

/// Render milliseconds since midnight as a 24-hour `"HH:MM"` clock time.
///
/// Values outside a single day wrap into it, negative values counting back
/// from midnight. Hours are always floored.
///
/// ```
/// use format_utils::duration::{ms_to_24_hour, MinuteRounding};
/// assert_eq!(ms_to_24_hour(123_456_789, MinuteRounding::Nearest), "10:18");
/// assert_eq!(ms_to_24_hour(123_456_789, MinuteRounding::Down), "10:17");
/// ```
pub fn ms_to_24_hour(ms: i64, rounding: MinuteRounding) -> String {
    let ms = ms.rem_euclid(MS_PER_DAY) as f64;

    let minutes = (ms / MS_PER_MINUTE) % 60.0;
    let hours = (ms / MS_PER_HOUR) % 24.0;

    format!(
        "{:02}:{:02}",
        hours.floor() as u32,
        rounding.apply(minutes) as u32
    )
}
