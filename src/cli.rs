//! Command-line argument schema.

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::types::{AccessMeasure, TravelMode};

/// Spatial access choropleth CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "accessmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one city's access scores as a choropleth SVG
    Render(RenderArgs),

    /// Summarize a dataset: rows, cities, score columns
    Inspect(InspectArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum ScaleKind {
    Step,
    Continuous,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum PaletteKind {
    Bupu,
    WhiteRed,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Dataset file (.parquet or .csv)
    #[arg(value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// City to render, e.g. Vancouver
    pub city: String,

    /// Destination category
    #[arg(long, value_enum, default_value = "employment")]
    pub measure: AccessMeasure,

    /// Travel mode
    #[arg(long = "mode", value_enum, default_value = "transit-peak")]
    pub travel_mode: TravelMode,

    /// Step (bucketed) or continuous color scale
    #[arg(long, value_enum, default_value = "step")]
    pub scale: ScaleKind,

    /// Color palette
    #[arg(long, value_enum, default_value = "bupu")]
    pub palette: PaletteKind,

    /// Histogram bin count for the verbose summary
    #[arg(long, default_value_t = 10)]
    pub bins: usize,

    /// Output width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Output SVG file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Dataset file (.parquet or .csv)
    #[arg(value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}
