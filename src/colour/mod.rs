pub mod rgb;
pub mod contrast;

pub use rgb::{ColourError, Rgb};
pub use contrast::{contrast_colour, contrast_colour_with, DEFAULT_DARK, DEFAULT_LIGHT};
