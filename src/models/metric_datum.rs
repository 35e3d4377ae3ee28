use crate::{
    convert::serialize_timestamp,
    models::{Dimension, StatisticSet},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single metric data point.
///
/// A well-formed datum carries a [`value`](Self::value), a value array
/// ([`values`](Self::values) plus optional [`counts`](Self::counts)) or a
/// [`statistic_values`](Self::statistic_values) set. Nothing here enforces that: a datum with
/// none of them is passed through untouched and left for the ingestion API to reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDatum {
    /// Name of the metric.
    pub metric_name: String,

    /// Dimensions identifying the metric. Order is kept on the wire.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,

    /// Time of the observation.
    #[serde(
        serialize_with = "serialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,

    /// Unit of measure, e.g. `"Seconds"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Single scalar value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Sample values. Each value is counted once unless [`counts`](Self::counts) is set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<f64>,

    /// Number of occurrences of the value at the same index in [`values`](Self::values).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<f64>>,

    /// Summary statistics of a population of samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic_values: Option<StatisticSet>,

    /// Resolution in seconds, `1` for high resolution metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_resolution: Option<i64>,
}

impl MetricDatum {
    /// Create a datum with the given name and nothing else set.
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            ..Default::default()
        }
    }

    /// Add a dimension.
    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.push(Dimension::new(name, value));
        self
    }

    /// Set the observation time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set a single scalar value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the value array. `counts`, if given, must have the same length as `values`.
    pub fn with_values(mut self, values: Vec<f64>, counts: Option<Vec<f64>>) -> Self {
        self.values = values;
        self.counts = counts;
        self
    }

    /// Set the statistic set.
    pub fn with_statistic_values(mut self, statistic_values: StatisticSet) -> Self {
        self.statistic_values = Some(statistic_values);
        self
    }

    /// Set the storage resolution.
    pub fn with_storage_resolution(mut self, storage_resolution: i64) -> Self {
        self.storage_resolution = Some(storage_resolution);
        self
    }
}
