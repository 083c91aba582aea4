// Metric identity for comparison buckets

use std::fmt;

/// Verb used for pod startup latencies, which have no REST verb
pub const POD_STARTUP_VERB: &str = "Pod-Startup";

/// Identifies a metric uniquely
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricKey {
    /// Name of the test ("Load Capacity", "Density", etc)
    pub test_name: String,
    /// "GET", "LIST", etc for API calls and "Pod-Startup" for pod startup
    pub verb: String,
    /// "nodes", "pods", etc for API calls, empty for pod startup
    pub resource: String,
    /// "status", "binding", etc. Empty for pod startup and most API calls
    pub subresource: String,
    /// Percentile label ("Perc50", "Perc90", etc)
    pub percentile: String,
}

impl MetricKey {
    pub fn new(
        test_name: impl Into<String>,
        verb: impl Into<String>,
        resource: impl Into<String>,
        subresource: impl Into<String>,
        percentile: impl Into<String>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            verb: verb.into(),
            resource: resource.into(),
            subresource: subresource.into(),
            percentile: percentile.into(),
        }
    }
}

/// Which job a sample came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}
