//! Dataset loading and per-city feature extraction.
//!
//! The dataset is one table: a binary `geometry` column (WKB polygons, one
//! per dissemination block), a `city` column, and one `acs_idx_*` score
//! column per measure/mode pair. Polars is the analytical engine; this
//! module turns its query output into the columnar structures the rest of
//! the pipeline consumes.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;

use crate::column::{AttributeColumn, FeatureBatch, PackedGeometryColumn};

pub const GEOMETRY_COLUMN: &str = "geometry";
pub const CITY_COLUMN: &str = "city";

/// Read the dataset from a Parquet or CSV file, chosen by extension.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[dataset] Failed to open {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            let df = ParquetReader::new(file)
                .finish()
                .with_context(|| format!("[dataset] Failed to read parquet: {}", path.display()))?;
            Ok(df)
        }
        Some("csv") => {
            let df = CsvReader::new(file)
                .finish()
                .with_context(|| format!("[dataset] Failed to read csv: {}", path.display()))?;
            Ok(df)
        }
        other => bail!("[dataset] Unsupported dataset extension: {:?}", other),
    }
}

/// Rows belonging to one city.
pub fn filter_city(df: &DataFrame, city: &str) -> Result<DataFrame> {
    let mask = df
        .column(CITY_COLUMN)
        .context("[dataset] Dataset has no 'city' column")?
        .str()
        .context("[dataset] 'city' column must be a string column")?
        .equal(city);
    let filtered = df.filter(&mask)?;
    Ok(filtered)
}

/// Extract the geometry column and one score column into a feature batch.
///
/// Geometry records are packed as-is; nothing here checks that they are
/// valid WKB. Rows with a missing geometry are rejected, since there would
/// be nothing to draw for them.
pub fn feature_batch(df: &DataFrame, score_column: &str) -> Result<FeatureBatch> {
    let geoms = df
        .column(GEOMETRY_COLUMN)
        .context("[dataset] Dataset has no 'geometry' column")?
        .binary()
        .context("[dataset] 'geometry' column must be binary WKB")?;

    let mut records = Vec::with_capacity(geoms.len());
    for (i, record) in geoms.into_iter().enumerate() {
        match record {
            Some(bytes) => records.push(bytes),
            None => bail!("[dataset] Missing geometry at row {}", i),
        }
    }
    let geometry = PackedGeometryColumn::from_records(records);

    let scores = df
        .column(score_column)
        .with_context(|| format!("[dataset] Dataset has no score column '{}'", score_column))?
        .cast(&DataType::Float64)
        .with_context(|| format!("[dataset] Score column '{}' is not numeric", score_column))?;
    let values: Vec<Option<f64>> = scores.f64()?.into_iter().collect();

    FeatureBatch::new(geometry, vec![AttributeColumn::new(score_column, values)])
}

/// Feature counts per city, for dataset summaries.
pub fn city_counts(df: &DataFrame) -> Result<BTreeMap<String, usize>> {
    let cities = df
        .column(CITY_COLUMN)
        .context("[dataset] Dataset has no 'city' column")?
        .str()
        .context("[dataset] 'city' column must be a string column")?;

    let mut counts = BTreeMap::new();
    for city in cities.into_iter().flatten() {
        *counts.entry(city.to_string()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Names of the score columns present in the dataset.
pub fn score_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .filter(|name| name.starts_with("acs_idx_"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn sample_frame() -> DataFrame {
        let geometry = Column::new(
            GEOMETRY_COLUMN.into(),
            &[b"AB".as_slice(), b"CDE".as_slice(), b"F".as_slice()],
        );
        let city = Column::new(CITY_COLUMN.into(), &["Vancouver", "Toronto", "Vancouver"]);
        let score = Column::new("acs_idx_emp_acs_walking".into(), &[0.2f64, 0.5, 0.9]);
        DataFrame::new(vec![geometry, city, score]).unwrap()
    }

    #[test]
    fn filter_and_extract() {
        let df = sample_frame();
        let vancouver = filter_city(&df, "Vancouver").unwrap();
        assert_eq!(vancouver.height(), 2);

        let batch = feature_batch(&vancouver, "acs_idx_emp_acs_walking").unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.geometry().record(0), Some(b"AB".as_slice()));
        assert_eq!(batch.geometry().record(1), Some(b"F".as_slice()));

        let scores = batch.attribute("acs_idx_emp_acs_walking").unwrap();
        assert_eq!(scores.get(0), Some(0.2));
        assert_eq!(scores.get(1), Some(0.9));
    }

    #[test]
    fn missing_score_column_is_an_error() {
        let df = sample_frame();
        let err = feature_batch(&df, "acs_idx_hf_acs_cycling").unwrap_err();
        assert!(format!("{:#}", err).contains("acs_idx_hf_acs_cycling"));
    }

    #[test]
    fn summaries() {
        let df = sample_frame();
        let counts = city_counts(&df).unwrap();
        assert_eq!(counts.get("Vancouver"), Some(&2));
        assert_eq!(counts.get("Toronto"), Some(&1));
        assert_eq!(score_columns(&df), vec!["acs_idx_emp_acs_walking".to_string()]);
    }
}
