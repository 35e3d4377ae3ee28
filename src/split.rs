use crate::models::{MetricDatum, StatisticSet};

/// Maximum number of values in a single datum.
///
/// "The Values and Counts method enables you to publish up to 150 values per metric with one
/// PutMetricData request"
pub const MAX_VALUES_SIZE: usize = 150;

/// Maximum number of datum in a single request.
///
/// "Each request is also limited to no more than 20 different metrics"
pub const MAX_DATUM_SIZE: usize = 20;

/// Splits a datum whose value array is larger than [`MAX_VALUES_SIZE`] into several datum.
///
/// Values and counts keep their order across the returned datum. A statistic set is moved to
/// the last datum, with its sample count reduced by one for every other datum, and every
/// other datum gets a stand-in set with a sample count of 1, a sum of 0 and the original
/// minimum and maximum. This keeps the reported minimum, maximum and total sample count
/// unchanged. If the sample count is too small to hand one to every other datum, every datum
/// keeps the original set.
pub fn split_large_value_array(datum: &MetricDatum) -> Vec<MetricDatum> {
    split_value_array(datum, MAX_VALUES_SIZE)
}

pub(crate) fn split_value_array(datum: &MetricDatum, max_values: usize) -> Vec<MetricDatum> {
    if datum.values.len() <= max_values {
        return vec![datum.clone()];
    }

    let template = MetricDatum {
        values: Vec::new(),
        counts: None,
        ..datum.clone()
    };
    let mut result: Vec<MetricDatum> = datum
        .values
        .chunks(max_values)
        .enumerate()
        .map(|(i, values)| {
            let start = i * max_values;
            MetricDatum {
                values: values.to_vec(),
                counts: datum.counts.as_ref().map(|counts| {
                    counts
                        .iter()
                        .skip(start)
                        .take(values.len())
                        .copied()
                        .collect()
                }),
                ..template.clone()
            }
        })
        .collect();

    if let Some(statistic_values) = datum.statistic_values {
        let others = (result.len() - 1) as f64;
        if let Some((last, rest)) = result
            .split_last_mut()
            .filter(|_| others < statistic_values.sample_count)
        {
            for other in rest {
                other.statistic_values = Some(StatisticSet {
                    sample_count: 1.0,
                    sum: 0.0,
                    minimum: statistic_values.minimum,
                    maximum: statistic_values.maximum,
                });
            }
            last.statistic_values = Some(StatisticSet {
                sample_count: statistic_values.sample_count - others,
                ..statistic_values
            });
        }
    }

    crate::debug!(
        "Split {} values of metric {} into {} datum",
        datum.values.len(),
        datum.metric_name,
        result.len()
    );
    result
}

/// Splits datum into buckets of at most [`MAX_DATUM_SIZE`], keeping their order.
///
/// Always returns at least one bucket, which is empty for empty input.
pub fn bucket_datum(datum: Vec<MetricDatum>) -> Vec<Vec<MetricDatum>> {
    bucket(datum, MAX_DATUM_SIZE)
}

pub(crate) fn bucket(mut datum: Vec<MetricDatum>, max_datum: usize) -> Vec<Vec<MetricDatum>> {
    let mut result = Vec::with_capacity(1 + datum.len() / max_datum);
    while datum.len() > max_datum {
        let rest = datum.split_off(max_datum);
        result.push(datum);
        datum = rest;
    }
    result.push(datum);
    result
}
