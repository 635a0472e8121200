//! Fixed palettes for choropleth fills.

use super::Rgb;

/// ColorBrewer BuPu, 9-class sequential scheme.
pub const BUPU_9: [Rgb; 9] = [
    Rgb { r: 247, g: 252, b: 253 },
    Rgb { r: 224, g: 236, b: 244 },
    Rgb { r: 191, g: 211, b: 230 },
    Rgb { r: 158, g: 188, b: 218 },
    Rgb { r: 140, g: 150, b: 198 },
    Rgb { r: 140, g: 107, b: 177 },
    Rgb { r: 136, g: 65, b: 157 },
    Rgb { r: 129, g: 15, b: 124 },
    Rgb { r: 77, g: 0, b: 75 },
];

/// Plain white-to-red ramp.
pub const WHITE_RED: [Rgb; 2] = [
    Rgb { r: 255, g: 255, b: 255 },
    Rgb { r: 255, g: 0, b: 0 },
];

/// A named, ordered sequence of anchor colors.
///
/// In step mode each anchor is one bucket; in continuous mode the anchors
/// are interpolated piecewise-linearly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    BuPu,
    WhiteRed,
}

impl Palette {
    pub fn colors(self) -> &'static [Rgb] {
        match self {
            Palette::BuPu => &BUPU_9,
            Palette::WhiteRed => &WHITE_RED,
        }
    }
}
