//! Metric value records and their flattened wire parameters.

/// A single metric observation to report.
///
/// The value travels as a string exactly as given; no numeric parsing or
/// normalization happens on this side of the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricValue {
    pub name: String,
    pub unit: String,
    pub value: String,
}

impl MetricValue {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            value: value.into(),
        }
    }
}

/// Flattens metric values into `MetricData.member.<i>.*` parameters.
///
/// Indices are 1-based and follow the caller's input order; the receiving
/// API uses the index to associate the three fields of each triple.
pub fn member_params(values: &[MetricValue]) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(values.len() * 3);

    for (i, value) in values.iter().enumerate() {
        let prefix = format!("MetricData.member.{}.", i + 1);

        params.push((format!("{prefix}MetricName"), value.name.clone()));
        params.push((format!("{prefix}Unit"), value.unit.clone()));
        params.push((format!("{prefix}Value"), value.value.clone()));
    }

    params
}
