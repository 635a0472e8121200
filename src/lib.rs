#![doc = "Accessmap public API"]
pub mod cli;
pub mod commands;

mod color;
mod column;
mod dataset;
mod histogram;
mod render;
mod types;
mod wkb;

#[doc(inline)]
pub use color::{ColorScale, Palette, Rgb, ScaleMode};

#[doc(inline)]
pub use column::{AttributeColumn, FeatureBatch, PackedGeometryColumn};

#[doc(inline)]
pub use dataset::{feature_batch, filter_city, read_dataset};

#[doc(inline)]
pub use histogram::{summarize, Bin, Histogram};

#[doc(inline)]
pub use render::{render_choropleth, RenderOptions};

#[doc(inline)]
pub use types::{find_city, score_column, AccessMeasure, City, TravelMode, CITIES};

#[doc(inline)]
pub use wkb::{decode_polygons, polygon_from_wkb};
