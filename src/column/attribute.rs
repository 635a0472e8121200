//! Attribute columns positionally aligned with a geometry column.

use anyhow::{bail, Result};

use super::PackedGeometryColumn;

/// A named numeric column; row `i` describes geometry record `i`.
#[derive(Debug, Clone)]
pub struct AttributeColumn {
    name: String,
    values: Vec<Option<f64>>,
}

impl AttributeColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at row `i`; `None` for a missing value or an out-of-range row.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Present, finite values in row order.
    pub fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .filter_map(|v| v.filter(|x| x.is_finite()))
    }

    /// (min, max) over present finite values.
    ///
    /// A column with zero usable values yields the fallback domain (0, 1)
    /// rather than an error, so a color scale built from it stays usable.
    pub fn extent(&self) -> (f64, f64) {
        let mut extent: Option<(f64, f64)> = None;
        for v in self.finite_values() {
            extent = match extent {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            };
        }
        extent.unwrap_or((0.0, 1.0))
    }
}

/// One query batch: a packed geometry column plus its attribute columns.
///
/// Construction enforces the positional alignment invariant: every
/// attribute column must have exactly one value per geometry record.
#[derive(Debug, Clone)]
pub struct FeatureBatch {
    geometry: PackedGeometryColumn,
    attributes: Vec<AttributeColumn>,
}

impl FeatureBatch {
    pub fn new(geometry: PackedGeometryColumn, attributes: Vec<AttributeColumn>) -> Result<Self> {
        for column in &attributes {
            if column.len() != geometry.len() {
                bail!(
                    "[column] Attribute column '{}' has {} rows, expected {}",
                    column.name(),
                    column.len(),
                    geometry.len()
                );
            }
        }
        Ok(Self { geometry, attributes })
    }

    /// Number of features in the batch.
    pub fn len(&self) -> usize {
        self.geometry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    pub fn geometry(&self) -> &PackedGeometryColumn {
        &self.geometry
    }

    /// Look up an attribute column by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeColumn> {
        self.attributes.iter().find(|c| c.name() == name)
    }
}
