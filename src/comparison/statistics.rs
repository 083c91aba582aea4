// Summary statistics for comparison samples
//
// Standard deviation uses the single-pass population formula
// sqrt(E[x^2] - E[x]^2). It is numerically weaker than the two-pass formula
// (cancellation for large values with small spread, and a NaN result if the
// difference rounds below zero), but it matches historical comparison results
// bit for bit, so it must not be replaced.

/// Mean, population standard deviation and max of one side's samples
///
/// All fields are NaN when there is no data, including before
/// `JobComparisonData::compute_stats` has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub avg: f64,
    pub std_dev: f64,
    pub max: f64,
}

impl SampleStats {
    /// Statistics of an empty sample: every measure is NaN
    pub fn nan() -> Self {
        Self {
            avg: f64::NAN,
            std_dev: f64::NAN,
            max: f64::NAN,
        }
    }

    /// True when the statistics describe no data
    pub fn is_empty(&self) -> bool {
        self.avg.is_nan()
    }
}

impl Default for SampleStats {
    fn default() -> Self {
        Self::nan()
    }
}

/// Compute avg, standard deviation and max for a sample
///
/// # Example
/// ```
/// use perfcompare::comparison::compute_sample_stats;
///
/// let stats = compute_sample_stats(&[1.0, 2.0, 3.0]);
/// assert_eq!(stats.avg, 2.0);
/// assert_eq!(stats.max, 3.0);
/// assert!((stats.std_dev - 0.8165).abs() < 1e-4);
///
/// assert!(compute_sample_stats(&[]).avg.is_nan());
/// ```
pub fn compute_sample_stats(sample: &[f64]) -> SampleStats {
    let Some(&first) = sample.first() else {
        return SampleStats::nan();
    };

    let mut sum = 0.0;
    let mut square_sum = 0.0;
    let mut max = first;
    for &value in sample {
        sum += value;
        square_sum += value * value;
        max = max.max(value);
    }

    let len = sample.len() as f64;
    let avg = sum / len;
    SampleStats {
        avg,
        std_dev: (square_sum / len - avg * avg).sqrt(),
        max,
    }
}
