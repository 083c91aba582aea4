// Configuration for job comparison
//
// The request count threshold drops latency items measured over too few
// requests to be statistically meaningful.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum request count, matching the benchmark tool's flag default
pub const DEFAULT_MIN_ALLOWED_REQUEST_COUNT: i64 = 10;

/// Errors for invalid comparison configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_allowed_request_count must be non-negative, got {0}")]
    NegativeRequestCount(i64),
}

/// Configuration for building a job comparison
///
/// # Example
/// ```
/// use perfcompare::config::CompareConfig;
///
/// let config = CompareConfig::default();
/// assert_eq!(config.min_allowed_request_count, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Data items whose "Count" label is below this value are discarded
    ///
    /// Items without a "Count" label are never filtered. Items whose count
    /// does not parse as an integer are always discarded.
    pub min_allowed_request_count: i64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            min_allowed_request_count: DEFAULT_MIN_ALLOWED_REQUEST_COUNT,
        }
    }
}

impl CompareConfig {
    /// Create a configuration with the given request count threshold
    pub fn with_min_request_count(min_allowed_request_count: i64) -> Self {
        Self {
            min_allowed_request_count,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_allowed_request_count < 0 {
            return Err(ConfigError::NegativeRequestCount(
                self.min_allowed_request_count,
            ));
        }
        Ok(())
    }
}
