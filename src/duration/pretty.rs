pub const DEFAULT_MAX_UNITS: usize = 2;

/// A duration split into calendar-like units. Months are 30 days, years are
/// 12 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub mins: i64,
    pub secs: i64,
    pub ms: i64,
}

impl DurationParts {
    /// Decompose with floored division, each remainder carried to the next
    /// smaller unit.
    pub fn from_millis(ms: i64) -> Self {
        let secs = ms.div_euclid(1000);
        let mins = secs.div_euclid(60);
        let hours = mins.div_euclid(60);
        let days = hours.div_euclid(24);
        let months = days.div_euclid(30);
        let years = months.div_euclid(12);

        Self {
            years,
            months: months.rem_euclid(12),
            days: days.rem_euclid(30),
            hours: hours.rem_euclid(24),
            mins: mins.rem_euclid(60),
            secs: secs.rem_euclid(60),
            ms: ms.rem_euclid(1000),
        }
    }

    /// Unit chunks, largest first.
    fn chunks(&self) -> [(i64, String); 7] {
        [
            (self.years, plural(self.years, "year")),
            (self.months, plural(self.months, "month")),
            (self.days, plural(self.days, "day")),
            (self.hours, plural(self.hours, "hour")),
            (self.mins, plural(self.mins, "min")),
            (self.secs, plural(self.secs, "sec")),
            (self.ms, format!("{} ms", self.ms)),
        ]
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Render a millisecond duration using up to `max_units` consecutive units,
/// starting from the largest non-zero one.
///
/// `None` is treated as zero, which renders as `"0 ms"`.
///
/// ```
/// use format_utils::duration::ms_to_duration;
/// assert_eq!(ms_to_duration(Some(1_234_567), 2), "20 mins, 34 secs");
/// assert_eq!(ms_to_duration(Some(123_456), 4), "2 mins, 3 secs, 456 ms");
/// ```
pub fn ms_to_duration(ms: Option<i64>, max_units: usize) -> String {
    let chunks = DurationParts::from_millis(ms.unwrap_or(0)).chunks();

    // The ms chunk is always eligible, even when zero.
    let from = chunks[..chunks.len() - 1]
        .iter()
        .position(|(count, _)| *count != 0)
        .unwrap_or(chunks.len() - 1);
    let to = from.saturating_add(max_units).max(1).min(chunks.len());

    chunks
        .get(from..to)
        .unwrap_or_default()
        .iter()
        .map(|(_, text)| text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Media-player style timecode: `H:MM:SS` when there are hours, otherwise
/// `MM:SS`, with an optional `.mmm` millisecond suffix.
///
/// ```
/// use format_utils::duration::ms_to_media;
/// assert_eq!(ms_to_media(Some(3_723_004), false), "1:02:03");
/// assert_eq!(ms_to_media(Some(-61_500), true), "-01:01.500");
/// ```
pub fn ms_to_media(ms: Option<i64>, include_millis: bool) -> String {
    let ms = ms.unwrap_or(0);
    let sign = if ms < 0 { "-" } else { "" };
    let abs = ms.unsigned_abs();

    let millis = abs % 1000;
    let secs = (abs / 1000) % 60;
    let mins = (abs / 60_000) % 60;
    let hours = abs / 3_600_000;

    let mut out = if hours > 0 {
        format!("{sign}{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{sign}{mins:02}:{secs:02}")
    };
    if include_millis {
        out.push_str(&format!(".{millis:03}"));
    }
    out
}
