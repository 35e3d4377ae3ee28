use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Units accepted by the ingestion API.
///
/// https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_MetricDatum.html
pub const VALID_UNITS: &[&str] = &[
    "Seconds",
    "Microseconds",
    "Milliseconds",
    "Bytes",
    "Kilobytes",
    "Megabytes",
    "Gigabytes",
    "Terabytes",
    "Bits",
    "Kilobits",
    "Megabits",
    "Gigabits",
    "Terabits",
    "Percent",
    "Count",
    "Bytes/Second",
    "Kilobytes/Second",
    "Megabytes/Second",
    "Gigabytes/Second",
    "Terabytes/Second",
    "Bits/Second",
    "Kilobits/Second",
    "Megabits/Second",
    "Gigabits/Second",
    "Terabits/Second",
    "Count/Second",
    "None",
];

static VALID_UNIT_LOOKUP: Lazy<HashSet<&'static str>> =
    Lazy::new(|| VALID_UNITS.iter().copied().collect());

/// Returns `true` if `unit` is one of [`VALID_UNITS`]. Case sensitive.
pub fn is_valid_unit(unit: &str) -> bool {
    VALID_UNIT_LOOKUP.contains(unit)
}

/// Returns the unit if it is valid and `None` otherwise.
pub fn filter_invalid_unit(unit: Option<String>) -> Option<String> {
    unit.filter(|u| is_valid_unit(u))
}
