use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColourError {
    #[error("Finding contrast colours of HSL colours is not supported: {0}")]
    UnsupportedHsl(String),
    #[error("Invalid hex colour: {0}")]
    InvalidHex(String),
    #[error("Invalid rgb() colour: {0}")]
    InvalidRgb(String),
}

/// An RGB colour. Channels are kept as parsed, so `rgb()` input may carry
/// fractional or out-of-range values; they still score a luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form. A short digit is read on its
    /// own, so `#fff` is `(15, 15, 15)`, not white.
    pub fn from_hex(hex: &str) -> Result<Self, ColourError> {
        let invalid = || ColourError::InvalidHex(hex.to_string());
        let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map(f64::from)
                .map_err(|_| invalid())
        };
        match digits.len() {
            3 => Ok(Self::new(
                channel(&digits[0..1])?,
                channel(&digits[1..2])?,
                channel(&digits[2..3])?,
            )),
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Parse `rgb(r, g, b)`; whitespace around the channels is ignored. Any
    /// numeric channel is accepted.
    pub fn from_rgb_string(text: &str) -> Result<Self, ColourError> {
        let invalid = || ColourError::InvalidRgb(text.to_string());
        let inner = text
            .trim()
            .strip_prefix("rgb")
            .and_then(|s| s.trim_start().strip_prefix('('))
            .and_then(|s| s.trim_end().strip_suffix(')'))
            .ok_or_else(invalid)?;

        let channels = inner
            .split(',')
            .map(|c| c.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }

    /// Perceived brightness, weighting the channels 299/587/114. In `[0, 255]`
    /// for in-range channels.
    pub fn luminance(&self) -> f64 {
        let weighted =
            (self.r * 299.0).round() + (self.g * 587.0).round() + (self.b * 114.0).round();
        weighted / 1000.0
    }
}

impl FromStr for Rgb {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("hsl") {
            Err(ColourError::UnsupportedHsl(s.to_string()))
        } else if s.starts_with('#') {
            Rgb::from_hex(s)
        } else {
            Rgb::from_rgb_string(s)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // channels saturate into 0..=255
        let byte = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        write!(f, "#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}
