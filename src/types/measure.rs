//! Dataset vocabulary: destination categories and travel modes.
//!
//! Score columns in the spatial access measures dataset are named
//! `<measure code>_<mode code>`, e.g. `acs_idx_emp_acs_public_transit_peak`.

use clap::ValueEnum;

/// Destination category of an access score.
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum AccessMeasure {
    Employment,
    Healthcare,
    PrimaryEducation,
    PostSecondaryEducation,
    SportRecreation,
    CulturalArts,
}

impl AccessMeasure {
    /// Column-name prefix used by the dataset.
    pub fn code(self) -> &'static str {
        match self {
            AccessMeasure::Employment => "acs_idx_emp",
            AccessMeasure::Healthcare => "acs_idx_hf",
            AccessMeasure::PrimaryEducation => "acs_idx_ef",
            AccessMeasure::PostSecondaryEducation => "acs_idx_psef",
            AccessMeasure::SportRecreation => "acs_idx_srf",
            AccessMeasure::CulturalArts => "acs_idx_caf",
        }
    }

    /// Human-readable label for legends and summaries.
    pub fn label(self) -> &'static str {
        match self {
            AccessMeasure::Employment => "Employment",
            AccessMeasure::Healthcare => "Healthcare Facilities",
            AccessMeasure::PrimaryEducation => "Primary and Secondary Education",
            AccessMeasure::PostSecondaryEducation => "Post-secondary Education",
            AccessMeasure::SportRecreation => "Sport and Recreation Facilities",
            AccessMeasure::CulturalArts => "Cultural and Arts Facilities",
        }
    }
}

/// Travel mode of an access score.
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum TravelMode {
    TransitPeak,
    TransitOffpeak,
    Walking,
    Cycling,
}

impl TravelMode {
    /// Column-name suffix used by the dataset.
    pub fn code(self) -> &'static str {
        match self {
            TravelMode::TransitPeak => "acs_public_transit_peak",
            TravelMode::TransitOffpeak => "acs_public_transit_offpeak",
            TravelMode::Walking => "acs_walking",
            TravelMode::Cycling => "acs_cycling",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelMode::TransitPeak => "Public Transit (Peak Hours)",
            TravelMode::TransitOffpeak => "Public Transit (Off-Peak Hours)",
            TravelMode::Walking => "Walking",
            TravelMode::Cycling => "Cycling",
        }
    }
}

/// Dataset column holding the score for a measure/mode pair.
pub fn score_column(measure: AccessMeasure, mode: TravelMode) -> String {
    format!("{}_{}", measure.code(), mode.code())
}
