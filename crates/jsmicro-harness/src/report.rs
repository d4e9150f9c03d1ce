//! Suite reports: an aligned text table for terminals and JSON for tooling.

use jsmicro_core::Registry;
use serde::Serialize;

use crate::measurement::Measurement;

/// One `name<TAB>description` line per registered benchmark, in
/// registration order.
pub fn listing(registry: &Registry) -> String {
    registry
        .iter()
        .map(|entry| format!("{}\t{}\n", entry.name(), entry.description()))
        .collect()
}

/// Measurements from one suite run, in run order.
#[derive(Clone, Debug)]
pub struct Report {
    suite: String,
    measurements: Vec<Measurement>,
}

/// Flattened, serializable view of a [`Measurement`]. Times are nanoseconds.
#[derive(Debug, Serialize)]
struct Row<'a> {
    name: &'a str,
    description: &'a str,
    samples: usize,
    mean_ns: u128,
    median_ns: u128,
    min_ns: u128,
    max_ns: u128,
    value: String,
}

impl<'a> From<&'a Measurement> for Row<'a> {
    fn from(m: &'a Measurement) -> Self {
        Self {
            name: &m.name,
            description: &m.description,
            samples: m.samples.len(),
            mean_ns: m.mean().as_nanos(),
            median_ns: m.median().as_nanos(),
            min_ns: m.min().as_nanos(),
            max_ns: m.max().as_nanos(),
            value: m.value.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    suite: &'a str,
    results: Vec<Row<'a>>,
}

impl Report {
    /// Create an empty report for `suite`.
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            measurements: Vec::new(),
        }
    }

    /// Append a measurement.
    pub fn push(&mut self, m: Measurement) {
        self.measurements.push(m);
    }

    /// Suite name.
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// All measurements in run order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Render a human-readable table.
    pub fn summary(&self) -> String {
        let name_width = self
            .measurements
            .iter()
            .map(|m| m.name.len())
            .chain(std::iter::once("name".len()))
            .max()
            .unwrap_or(0);

        let mut out = format!("suite: {}\n", self.suite);
        out.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>6}\n",
            "name", "mean", "median", "min", "max", "value"
        ));
        for m in &self.measurements {
            out.push_str(&format!(
                "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>6}\n",
                m.name,
                format!("{:.3?}", m.mean()),
                format!("{:.3?}", m.median()),
                format!("{:.3?}", m.min()),
                format!("{:.3?}", m.max()),
                m.value.to_string(),
            ));
            if !m.description.is_empty() {
                out.push_str(&format!("  {}\n", m.description));
            }
        }
        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let report = JsonReport {
            suite: &self.suite,
            results: self.measurements.iter().map(Row::from).collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}
