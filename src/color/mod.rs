//! Color types and value-to-color classification.

mod palette;
mod scale;

pub use palette::{Palette, BUPU_9, WHITE_RED};
pub use scale::{ColorScale, ScaleMode};

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn css_display() {
        let c = Rgb { r: 136, g: 65, b: 157 };
        assert_eq!(c.to_string(), "rgb(136,65,157)");
    }
}
