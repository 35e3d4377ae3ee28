use crate::models::MetricDatum;
use serde::Serialize;

/// Metric data to publish under a single namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutMetricDataInput {
    /// Namespace of all the metric data.
    pub namespace: String,

    /// The metric data. May be larger than a single request allows.
    pub metric_data: Vec<MetricDatum>,
}

impl PutMetricDataInput {
    /// Create a new input.
    pub fn new(namespace: impl Into<String>, metric_data: Vec<MetricDatum>) -> Self {
        Self {
            namespace: namespace.into(),
            metric_data,
        }
    }
}

/// Result of a successful put.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct PutMetricDataOutput {}
