#![no_main]

use libfuzzer_sys::fuzz_target;
use perfcompare::comparison::{flattened_comparison_data, JobComparisonData};
use perfcompare::perftype::parse_job_metrics;

fuzz_target!(|data: &[u8]| {
    // Arbitrary job metrics must never panic aggregation, statistics or printing
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(job) = parse_job_metrics(input) {
            let mut comparison: JobComparisonData = flattened_comparison_data(&job, &job, 10);
            comparison.compute_stats();
            let mut sink: Vec<String> = Vec::new();
            comparison.pretty_print(&mut sink);
            let _ = comparison.render_stats_table();
        }
    }
});
