use serde::Serialize;

/// A name/value pair that is part of the identity of a metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    /// Name of the dimension.
    pub name: String,

    /// Value of the dimension.
    pub value: String,
}

impl Dimension {
    /// Create a new dimension.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
