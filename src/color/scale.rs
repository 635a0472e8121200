//! Value-to-color scales for choropleth classification.

use super::{Palette, Rgb};

/// Color for values that cannot be classified (NaN, missing data).
const FALLBACK: Rgb = Rgb { r: 200, g: 200, b: 200 };

/// How a scale maps the domain onto its palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleMode {
    /// Equal-width buckets, one palette anchor per bucket.
    Step,
    /// Piecewise-linear interpolation across the palette anchors.
    Continuous,
}

/// A deterministic value-to-color mapping over a [min, max] domain.
///
/// Immutable once built; `classify` is a pure function of the captured
/// (min, max, mode, palette). Out-of-domain values clamp to the domain
/// edges, and a degenerate domain (min == max) maps every value to the
/// first palette color instead of dividing by zero.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    min: f64,
    max: f64,
    mode: ScaleMode,
    palette: Palette,
}

impl ColorScale {
    /// Build a scale over an explicit [min, max] domain.
    ///
    /// A non-finite bound falls back to the [0, 1] domain; inverted bounds
    /// are normalized so min <= max.
    pub fn from_extent(min: f64, max: f64, palette: Palette, mode: ScaleMode) -> Self {
        let (min, max) = if !min.is_finite() || !max.is_finite() {
            (0.0, 1.0)
        } else if min > max {
            (max, min)
        } else {
            (min, max)
        };
        Self { min, max, mode, palette }
    }

    /// Build a scale from a sample sequence, ignoring non-finite samples.
    ///
    /// Zero usable samples yield the defined fallback domain [0, 1], never
    /// an error.
    pub fn from_samples<I>(samples: I, palette: Palette, mode: ScaleMode) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut extent: Option<(f64, f64)> = None;
        for v in samples.into_iter().filter(|v| v.is_finite()) {
            extent = match extent {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            };
        }
        let (min, max) = extent.unwrap_or((0.0, 1.0));
        Self::from_extent(min, max, palette, mode)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Normalized position of `value` in the domain, clamped to [0, 1].
    /// A degenerate domain pins every value to 0.
    fn position(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Map a value to its fill color.
    ///
    /// Non-finite values get the neutral fallback gray rather than an
    /// NaN-derived color.
    pub fn classify(&self, value: f64) -> Rgb {
        if !value.is_finite() {
            return FALLBACK;
        }
        let t = self.position(value);
        let colors = self.palette.colors();
        match self.mode {
            ScaleMode::Step => {
                let k = colors.len();
                let bucket = ((t * k as f64) as usize).min(k - 1);
                colors[bucket]
            }
            ScaleMode::Continuous => interpolate(colors, t),
        }
    }

    /// Swatch colors for a legend strip, in domain order.
    ///
    /// Step scales show one swatch per bucket; continuous scales are
    /// sampled at `samples` evenly spaced positions.
    pub fn legend_colors(&self, samples: usize) -> Vec<Rgb> {
        let colors = self.palette.colors();
        match self.mode {
            ScaleMode::Step => colors.to_vec(),
            ScaleMode::Continuous => {
                let n = samples.max(2);
                (0..n)
                    .map(|i| interpolate(colors, i as f64 / (n - 1) as f64))
                    .collect()
            }
        }
    }
}

/// Piecewise-linear interpolation over the anchors at position t in [0, 1].
fn interpolate(colors: &[Rgb], t: f64) -> Rgb {
    if colors.len() == 1 {
        return colors[0];
    }
    let segments = (colors.len() - 1) as f64;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let i = (scaled as usize).min(colors.len() - 2);
    let frac = scaled - i as f64;

    let lerp = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8
    };
    let (lo, hi) = (colors[i], colors[i + 1]);
    Rgb { r: lerp(lo.r, hi.r), g: lerp(lo.g, hi.g), b: lerp(lo.b, hi.b) }
}
