use tracing::debug;

use super::rgb::{ColourError, Rgb};

pub const DEFAULT_LIGHT: &str = "#ffffff";
pub const DEFAULT_DARK: &str = "#000000";

/// Luminance at or above which a colour counts as light.
const LIGHT_THRESHOLD: f64 = 128.0;

/// Pick white or black, whichever reads better on `css_colour`.
pub fn contrast_colour(css_colour: &str) -> Result<&'static str, ColourError> {
    contrast_colour_with(css_colour, DEFAULT_LIGHT, DEFAULT_DARK)
}

/// Pick `dark` for light backgrounds and `light` for dark ones.
///
/// `css_colour` may be `#rgb`, `#rrggbb` or `rgb(r, g, b)` with any numeric channels. An empty string
/// gives `dark`; HSL colours are rejected.
///
/// ```
/// use format_utils::colour::contrast_colour_with;
/// assert_eq!(contrast_colour_with("#fafafa", "white", "black").unwrap(), "black");
/// assert_eq!(contrast_colour_with("rgb(20, 20, 90)", "white", "black").unwrap(), "white");
/// ```
pub fn contrast_colour_with<'a>(
    css_colour: &str,
    light: &'a str,
    dark: &'a str,
) -> Result<&'a str, ColourError> {
    if css_colour.trim().is_empty() {
        return Ok(dark);
    }

    let rgb: Rgb = css_colour.parse().map_err(|e| {
        debug!(css_colour, error = %e, "cannot compute contrast colour");
        e
    })?;

    if rgb.luminance() >= LIGHT_THRESHOLD {
        Ok(dark)
    } else {
        Ok(light)
    }
}
