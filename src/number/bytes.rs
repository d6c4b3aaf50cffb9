use serde::{Deserialize, Serialize};

use super::decimal::{js_to_string, parse_number, to_fixed};

const UNITS: [&str; 9] = ["Bytes", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// How [`to_bytes`] scales and rounds. The default is base 1024 with no
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BytesOptions {
    /// Maximum decimal places; trailing zeros are dropped.
    pub decimals: usize,
    /// Scale by 1000 instead of 1024.
    pub base1000: bool,
}

impl BytesOptions {
    pub fn decimals(decimals: usize) -> Self {
        Self { decimals, ..Self::default() }
    }

    pub fn base1000() -> Self {
        Self { base1000: true, ..Self::default() }
    }
}

/// Format a byte count with the largest fitting unit.
///
/// `None`, zero and `NaN` render as `"0 Bytes"`.
///
/// ```
/// use format_utils::number::{to_bytes, BytesOptions};
/// assert_eq!(to_bytes(Some(120_000.0), &BytesOptions::default()), "117 kB");
/// assert_eq!(to_bytes(Some(120_000.0), &BytesOptions::decimals(2)), "117.19 kB");
/// ```
pub fn to_bytes(bytes: Option<f64>, options: &BytesOptions) -> String {
    let bytes = match bytes {
        Some(b) if b != 0.0 && !b.is_nan() => b,
        _ => return format!("0 {}", UNITS[0]),
    };

    let base: f64 = if options.base1000 { 1000.0 } else { 1024.0 };
    let index = unit_index(bytes, base);
    let scaled = bytes / base.powi(index as i32);

    // The numeric round-trip strips trailing zeros from the fixed rendering.
    let value = parse_number(&to_fixed(scaled, options.decimals));
    format!("{} {}", js_to_string(value), UNITS[index])
}

fn unit_index(bytes: f64, base: f64) -> usize {
    let index = (bytes.ln() / base.ln()).floor();
    if index.is_nan() || index < 0.0 {
        0
    } else {
        (index as usize).min(UNITS.len() - 1)
    }
}
