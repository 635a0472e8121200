//! Subcommand handlers wiring the pipeline together.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::cli::{Cli, InspectArgs, PaletteKind, RenderArgs, ScaleKind};
use crate::color::{ColorScale, Palette, ScaleMode};
use crate::dataset;
use crate::histogram;
use crate::render::{render_choropleth, RenderOptions};
use crate::types::{find_city, score_column};
use crate::wkb;

pub fn render(cli: &Cli, args: &RenderArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "[render] Output {} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    if cli.verbose > 0 {
        if let Some(city) = find_city(&args.city) {
            eprintln!("[render] city={} center=({}, {})", city.name, city.lon, city.lat);
        } else {
            eprintln!("[render] city={} (not in the known city table)", args.city);
        }
    }

    let df = dataset::read_dataset(&args.data)?;
    let city_df = dataset::filter_city(&df, &args.city)?;
    if city_df.height() == 0 {
        bail!("[render] No rows for city '{}' in the dataset", args.city);
    }
    if cli.verbose > 0 {
        eprintln!("[render] {} features for {}", city_df.height(), args.city);
    }

    let column = score_column(args.measure, args.travel_mode);
    let batch = dataset::feature_batch(&city_df, &column)?;
    let polygons = wkb::decode_polygons(batch.geometry())?;
    let scores = batch
        .attribute(&column)
        .context("[render] Score column missing from feature batch")?;

    let scale = ColorScale::from_samples(
        scores.finite_values(),
        palette_for(args.palette),
        mode_for(args.scale),
    );

    if cli.verbose > 0 {
        let summary = histogram::summarize(scores.finite_values(), args.bins);
        eprintln!(
            "[render] {} / {}: extent=[{:.3}, {:.3}] median={:?}",
            args.measure.label(),
            args.travel_mode.label(),
            scale.min(),
            scale.max(),
            summary.median,
        );
        if cli.verbose > 1 {
            for bin in &summary.bins {
                eprintln!("[render]   [{:.3}, {:.3}): {}", bin.lower, bin.upper, bin.count);
            }
        }
    }

    let options = RenderOptions { width: f64::from(args.width), ..RenderOptions::default() };
    render_choropleth(&args.output, &polygons, scores, &scale, &options)?;

    println!("Rendered {} features to {}", polygons.len(), args.output.display());
    Ok(())
}

#[derive(Debug, Serialize)]
struct DatasetSummary {
    rows: usize,
    cities: BTreeMap<String, usize>,
    score_columns: Vec<String>,
}

pub fn inspect(_cli: &Cli, args: &InspectArgs) -> Result<()> {
    let df = dataset::read_dataset(&args.data)?;
    let summary = DatasetSummary {
        rows: df.height(),
        cities: dataset::city_counts(&df)?,
        score_columns: dataset::score_columns(&df),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Rows: {}", summary.rows);
    println!("Cities:");
    for (city, count) in &summary.cities {
        println!("  - {}: {}", city, count);
    }
    println!("Score columns:");
    for column in &summary.score_columns {
        println!("  - {}", column);
    }
    Ok(())
}

fn palette_for(kind: PaletteKind) -> Palette {
    match kind {
        PaletteKind::Bupu => Palette::BuPu,
        PaletteKind::WhiteRed => Palette::WhiteRed,
    }
}

fn mode_for(kind: ScaleKind) -> ScaleMode {
    match kind {
        ScaleKind::Step => ScaleMode::Step,
        ScaleKind::Continuous => ScaleMode::Continuous,
    }
}
