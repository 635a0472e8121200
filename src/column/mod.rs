mod attribute;
mod geometry;

pub use attribute::{AttributeColumn, FeatureBatch};
pub use geometry::PackedGeometryColumn;
