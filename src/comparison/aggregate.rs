// Flattening of raw job metrics into per-metric comparison buckets

use crate::comparison::key::{MetricKey, Side, POD_STARTUP_VERB};
use crate::comparison::statistics::{compute_sample_stats, SampleStats};
use crate::perftype::{DataItem, RunMetrics};
use std::collections::hash_map;
use std::collections::HashMap;

/// Everything known about one metric's comparison
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricComparisonData {
    /// Sample values from the left job's runs
    pub left_samples: Vec<f64>,
    /// Sample values from the right job's runs
    pub right_samples: Vec<f64>,
    /// Whether the samples matched (set by a comparison policy)
    pub matched: bool,
    /// Any comments about the matching, for human interpretation
    pub comments: String,
    /// Statistics of `left_samples`, valid after `compute_stats`
    pub left: SampleStats,
    /// Statistics of `right_samples`, valid after `compute_stats`
    pub right: SampleStats,
}

impl MetricComparisonData {
    pub fn samples(&self, side: Side) -> &[f64] {
        match side {
            Side::Left => &self.left_samples,
            Side::Right => &self.right_samples,
        }
    }

    pub fn stats(&self, side: Side) -> &SampleStats {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn samples_mut(&mut self, side: Side) -> &mut Vec<f64> {
        match side {
            Side::Left => &mut self.left_samples,
            Side::Right => &mut self.right_samples,
        }
    }

    /// Recompute both sides' statistics from the current samples
    pub fn compute_stats(&mut self) {
        self.left = compute_sample_stats(&self.left_samples);
        self.right = compute_sample_stats(&self.right_samples);
    }
}

/// Comparison data for every metric of a pair of jobs
///
/// Not synchronized: finish all ingestion before calling `compute_stats`.
#[derive(Debug, Clone, Default)]
pub struct JobComparisonData {
    data: HashMap<MetricKey, MetricComparisonData>,
}

impl JobComparisonData {
    /// Create an empty comparison table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample value to a metric's comparison data
    ///
    /// NaN samples are ignored and never create a bucket.
    pub fn add_sample(&mut self, sample: f64, key: MetricKey, side: Side) {
        if sample.is_nan() {
            return;
        }
        self.data
            .entry(key)
            .or_default()
            .samples_mut(side)
            .push(sample);
    }

    /// Add every percentile value of a data item
    ///
    /// Items whose "Count" label is below `min_allowed_request_count`, or does
    /// not parse as an integer, are discarded as a whole. Items without a
    /// count are always kept.
    pub fn add_data_item(
        &mut self,
        item: &DataItem,
        min_allowed_request_count: i64,
        test_name: &str,
        side: Side,
    ) {
        if let Some(count) = item.label("Count") {
            match count.parse::<i64>() {
                Ok(count) if count >= min_allowed_request_count => {}
                Ok(count) => {
                    tracing::debug!(
                        "Discarding {} item in {}: count {} < {}",
                        side,
                        test_name,
                        count,
                        min_allowed_request_count
                    );
                    return;
                }
                Err(e) => {
                    tracing::debug!(
                        "Discarding {} item in {}: invalid count {:?}: {}",
                        side,
                        test_name,
                        count,
                        e
                    );
                    return;
                }
            }
        }

        let verb = if item.label("Metric") == Some("pod_startup") {
            POD_STARTUP_VERB
        } else {
            item.label_or_empty("Verb")
        };
        let resource = item.label_or_empty("Resource");
        let subresource = item.label_or_empty("Subresource");

        for (percentile, &value) in &item.data {
            let key = MetricKey::new(test_name, verb, resource, subresource, percentile.as_str());
            self.add_sample(value, key, side);
        }
    }

    /// Ingest every run of one job into the given side
    pub fn add_job_metrics(
        &mut self,
        job_metrics: &[RunMetrics],
        min_allowed_request_count: i64,
        side: Side,
    ) {
        for run_metrics in job_metrics {
            for (test_name, latency_groups) in run_metrics {
                for latencies in latency_groups {
                    for item in &latencies.data_items {
                        self.add_data_item(item, min_allowed_request_count, test_name, side);
                    }
                }
            }
        }
    }

    /// Compute avg, std-dev and max of each metric's left and right samples
    pub fn compute_stats(&mut self) {
        for metric_data in self.data.values_mut() {
            metric_data.compute_stats();
        }
        tracing::debug!("Computed statistics for {} metrics", self.data.len());
    }

    pub fn get(&self, key: &MetricKey) -> Option<&MetricComparisonData> {
        self.data.get(key)
    }

    /// Mutable access for comparison policies that set `matched`/`comments`
    pub fn get_mut(&mut self, key: &MetricKey) -> Option<&mut MetricComparisonData> {
        self.data.get_mut(key)
    }

    pub fn contains_key(&self, key: &MetricKey) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all metrics, in no particular order
    pub fn iter(&self) -> hash_map::Iter<'_, MetricKey, MetricComparisonData> {
        self.data.iter()
    }
}

/// Flatten latencies from all runs of the left and right jobs into one table
///
/// Samples with a request count below `min_allowed_request_count` are
/// discarded along the way. Statistics are not computed; call
/// `JobComparisonData::compute_stats` on the result.
///
/// # Example
/// ```
/// use perfcompare::comparison::flattened_comparison_data;
///
/// let table = flattened_comparison_data(&[], &[], 10);
/// assert!(table.is_empty());
/// ```
pub fn flattened_comparison_data(
    left_job_metrics: &[RunMetrics],
    right_job_metrics: &[RunMetrics],
    min_allowed_request_count: i64,
) -> JobComparisonData {
    let mut comparison = JobComparisonData::new();
    comparison.add_job_metrics(left_job_metrics, min_allowed_request_count, Side::Left);
    comparison.add_job_metrics(right_job_metrics, min_allowed_request_count, Side::Right);
    tracing::debug!(
        "Flattened {} left and {} right run(s) into {} metrics",
        left_job_metrics.len(),
        right_job_metrics.len(),
        comparison.len()
    );
    comparison
}
