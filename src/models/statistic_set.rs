use serde::Serialize;

/// Aggregate of an implicit population of samples.
///
/// The ingestion API does not check `sum` against the other fields and neither does this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticSet {
    /// Number of samples in the population. At least 1.
    pub sample_count: f64,

    /// Sum of all samples.
    pub sum: f64,

    /// Smallest sample.
    pub minimum: f64,

    /// Largest sample.
    pub maximum: f64,
}
