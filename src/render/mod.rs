//! Choropleth SVG rendering.
//!
//! The static analogue of the polygon map layer plus its legend strip:
//! every feature is drawn as one path filled by the color scale, holes
//! handled via even-odd fill.

mod writer;

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use anyhow::{anyhow, Result};
use geo::{BoundingRect, Coord, LineString, Polygon, Rect};

use crate::color::ColorScale;
use crate::column::AttributeColumn;
use writer::SvgWriter;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output width in pixels; height follows the aspect ratio of the data.
    pub width: f64,
    pub margin: f64,
    /// Sample count for a continuous legend strip.
    pub legend_samples: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 1200.0, margin: 10.0, legend_samples: 10 }
    }
}

/// Render decoded polygons as a choropleth SVG with a legend.
///
/// Feature `i` is filled with `scale.classify(values[i])`; a missing value
/// gets the scale's fallback color. Expects one value per polygon.
pub fn render_choropleth(
    path: &Path,
    polygons: &[Polygon<f64>],
    values: &AttributeColumn,
    scale: &ColorScale,
    options: &RenderOptions,
) -> Result<()> {
    if polygons.len() != values.len() {
        return Err(anyhow!(
            "[render] {} polygons but {} values",
            polygons.len(),
            values.len()
        ));
    }
    let bounds = data_bounds(polygons)
        .ok_or_else(|| anyhow!("[render] Could not determine bounds; nothing to draw."))?;
    if bounds.width() == 0.0 || bounds.height() == 0.0 {
        return Err(anyhow!(
            "[render] Degenerate bounds ({} x {}); nothing to draw.",
            bounds.width(),
            bounds.height()
        ));
    }

    let margin = options.margin;
    let width = options.width;
    let scale_px = (width - 2.0 * margin) / bounds.width();
    let height = bounds.height() * scale_px + 2.0 * margin;

    // lon/lat -> SVG coords (Y down)
    let project = move |coord: &Coord<f64>| -> (f64, f64) {
        let x = margin + (coord.x - bounds.min().x) * scale_px;
        let y = margin + (bounds.max().y - coord.y) * scale_px;
        (x, y)
    };

    let mut writer = SvgWriter::new(path)?;
    writer.write_header(width, height, &bounds)?;
    writer.write_styles()?;

    for (i, polygon) in polygons.iter().enumerate() {
        let fill = scale.classify(values.get(i).unwrap_or(f64::NAN));
        let d = polygon_path(polygon, &project);
        writeln!(
            writer,
            r#"<path class="feat" fill-rule="evenodd" style="fill:{fill}" d="{d}"/>"#,
        )?;
    }

    write_legend(&mut writer, scale, options, height)?;
    writer.write_footer()?;
    writer.flush()?;
    Ok(())
}

/// Bounding rect over every polygon, None when there is nothing to draw.
fn data_bounds(polygons: &[Polygon<f64>]) -> Option<Rect<f64>> {
    let mut bounds: Option<Rect<f64>> = None;
    for rect in polygons.iter().filter_map(|p| p.bounding_rect()) {
        bounds = Some(match bounds {
            None => rect,
            Some(acc) => Rect::new(
                Coord { x: acc.min().x.min(rect.min().x), y: acc.min().y.min(rect.min().y) },
                Coord { x: acc.max().x.max(rect.max().x), y: acc.max().y.max(rect.max().y) },
            ),
        });
    }
    bounds
}

/// Path data for one polygon: exterior ring then holes, each closed.
fn polygon_path(polygon: &Polygon<f64>, project: &impl Fn(&Coord<f64>) -> (f64, f64)) -> String {
    let mut d = String::new();
    ring_path(&mut d, polygon.exterior(), project);
    for interior in polygon.interiors() {
        ring_path(&mut d, interior, project);
    }
    d
}

fn ring_path(d: &mut String, ring: &LineString<f64>, project: &impl Fn(&Coord<f64>) -> (f64, f64)) {
    for (i, coord) in ring.coords().enumerate() {
        let (x, y) = project(coord);
        let op = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{op}{x:.2} {y:.2} ");
    }
    d.push_str("Z ");
}

/// Legend strip at the bottom-left: swatches plus min / midpoint / max labels.
fn write_legend(
    writer: &mut SvgWriter,
    scale: &ColorScale,
    options: &RenderOptions,
    height: f64,
) -> Result<()> {
    let swatches = scale.legend_colors(options.legend_samples);
    let strip_width = 200.0;
    let strip_height = 12.0;
    let x0 = options.margin;
    let y0 = height - options.margin - strip_height - 14.0;
    let cell = strip_width / swatches.len() as f64;

    for (i, color) in swatches.iter().enumerate() {
        writeln!(
            writer,
            r#"<rect x="{x:.2}" y="{y0:.2}" width="{cell:.2}" height="{strip_height}" fill="{color}"/>"#,
            x = x0 + cell * i as f64,
        )?;
    }

    let mid = (scale.min() + scale.max()) / 2.0;
    for (value, anchor, x) in [
        (scale.min(), "start", x0),
        (mid, "middle", x0 + strip_width / 2.0),
        (scale.max(), "end", x0 + strip_width),
    ] {
        writeln!(
            writer,
            r#"<text class="legend-label" x="{x:.2}" y="{y:.2}" text-anchor="{anchor}">{value:.2}</text>"#,
            y = y0 + strip_height + 11.0,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{data_bounds, render_choropleth, RenderOptions};
    use crate::color::{ColorScale, Palette, ScaleMode};
    use crate::column::AttributeColumn;
    use geo::{polygon, Polygon};

    fn squares() -> Vec<Polygon<f64>> {
        vec![
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)],
            polygon![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 1.0, y: 1.0)],
        ]
    }

    #[test]
    fn bounds_cover_all_features() {
        let bounds = data_bounds(&squares()).unwrap();
        assert_eq!(bounds.min().x, 0.0);
        assert_eq!(bounds.max().x, 2.0);
        assert!(data_bounds(&[]).is_none());
    }

    #[test]
    fn writes_a_filled_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");

        let values = AttributeColumn::new("score", vec![Some(0.1), None]);
        let scale = ColorScale::from_extent(0.0, 1.0, Palette::BuPu, ScaleMode::Step);
        render_choropleth(&path, &squares(), &values, &scale, &RenderOptions::default()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches(r#"class="feat""#).count(), 2);
        // The missing value is drawn in the fallback gray.
        assert!(svg.contains("fill:rgb(200,200,200)"));
        // Legend labels carry the domain.
        assert!(svg.contains(">0.00<") && svg.contains(">1.00<"));
    }

    #[test]
    fn rejects_zero_extent_bounds() {
        // All features collapsed onto one point: no drawable extent.
        let point: Polygon<f64> =
            polygon![(x: 2.0, y: 2.0), (x: 2.0, y: 2.0), (x: 2.0, y: 2.0)];
        let values = AttributeColumn::new("score", vec![Some(0.1)]);
        let scale = ColorScale::from_extent(0.0, 1.0, Palette::BuPu, ScaleMode::Step);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");

        let err = render_choropleth(&path, &[point], &values, &scale, &RenderOptions::default())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Degenerate bounds"));
    }

    #[test]
    fn rejects_misaligned_inputs() {
        let values = AttributeColumn::new("score", vec![Some(0.1)]);
        let scale = ColorScale::from_extent(0.0, 1.0, Palette::BuPu, ScaleMode::Step);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        assert!(render_choropleth(&path, &squares(), &values, &scale, &RenderOptions::default()).is_err());
    }
}
