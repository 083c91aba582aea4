// Job comparison: aggregate latency samples from two benchmark jobs
//
// Raw data items from every run of the left and right jobs are flattened into
// buckets keyed by (test, verb, resource, subresource, percentile). Each bucket
// keeps the left and right samples separately, and a single statistics pass
// fills in mean, standard deviation and max for both sides.
//
// Lifecycle: new → add_* (ingestion) → compute_stats → pretty_print.
// Nothing is recomputed on insert; call compute_stats again after adding
// more samples.
//
// Judging whether a bucket matched (the `matched`/`comments` fields) is left
// to comparison policies built on top of this table.

mod aggregate;
mod key;
mod report;
mod statistics;

pub use aggregate::{flattened_comparison_data, JobComparisonData, MetricComparisonData};
pub use key::{MetricKey, Side, POD_STARTUP_VERB};
pub use report::{DiagnosticSink, TracingSink};
pub use statistics::{compute_sample_stats, SampleStats};
