//! Raw performance records produced by benchmark jobs
//!
//! These mirror the JSON emitted by e2e performance tests: every run maps a
//! test name to a list of latency groups, and every group carries data items
//! with string labels and a percentile → value map.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A single measured item (one endpoint, one metric)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    /// Percentile label (e.g. "Perc50") → measured value
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: HashMap<String, f64>,
    /// Unit of the values in `data` (e.g. "ms")
    #[serde(default)]
    pub unit: String,
    /// Labels such as "Verb", "Resource", "Subresource", "Count", "Metric"
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub labels: HashMap<String, String>,
}

impl DataItem {
    /// Look up a label, treating an empty value the same as a missing one
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Label value or the empty string
    pub fn label_or_empty(&self, name: &str) -> &str {
        self.label(name).unwrap_or("")
    }
}

/// A latency group: a versioned list of data items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerfData {
    #[serde(default)]
    pub version: String,
    #[serde(rename = "dataItems", default, deserialize_with = "null_as_default")]
    pub data_items: Vec<DataItem>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub labels: HashMap<String, String>,
}

// Nil maps and slices are encoded as `null` by the producers of these files.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metrics of one benchmark run, keyed by test name ("Density", "Load Capacity", ...)
pub type RunMetrics = HashMap<String, Vec<PerfData>>;

/// Metrics of every run of one job
pub type JobMetrics = Vec<RunMetrics>;

/// Load a job's metrics from a JSON file holding an array of runs
pub fn load_job_metrics(path: &Path) -> Result<JobMetrics> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job metrics from {}", path.display()))?;
    parse_job_metrics(&contents)
        .with_context(|| format!("Failed to parse job metrics in {}", path.display()))
}

/// Parse a job's metrics from JSON text
pub fn parse_job_metrics(json: &str) -> Result<JobMetrics> {
    let metrics: JobMetrics = serde_json::from_str(json)?;
    tracing::debug!("Parsed {} run(s) of job metrics", metrics.len());
    Ok(metrics)
}
