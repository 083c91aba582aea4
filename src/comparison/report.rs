// Tabular dumps of comparison data
//
// Columns are aligned like a tab writer with padding 2: every column but the
// last is padded to its widest cell plus two spaces, and the last cell is
// written as-is.

use crate::comparison::aggregate::{JobComparisonData, MetricComparisonData};
use crate::comparison::key::MetricKey;

const COLUMN_PADDING: usize = 2;

const HEADER: [&str; 7] = [
    "E2E TEST",
    "VERB",
    "RESOURCE",
    "SUBRESOURCE",
    "PERCENTILE",
    "MATCHED?",
    "COMMENTS",
];

const STATS_HEADER: [&str; 11] = [
    "E2E TEST",
    "VERB",
    "RESOURCE",
    "SUBRESOURCE",
    "PERCENTILE",
    "AVG L",
    "STDEV L",
    "MAX L",
    "AVG R",
    "STDEV R",
    "MAX R",
];

/// Destination for diagnostic dumps
///
/// Injected into `pretty_print` so output can be captured in tests instead of
/// going through the process-wide logger.
pub trait DiagnosticSink {
    fn write_message(&mut self, message: &str);
}

/// Forwards diagnostics to `tracing` at INFO level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write_message(&mut self, message: &str) {
        tracing::info!("\n{}", message);
    }
}

impl DiagnosticSink for Vec<String> {
    fn write_message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl JobComparisonData {
    /// Render one row per metric: key columns, matched flag and comments
    pub fn render_table(&self) -> String {
        let rows = self.sorted_rows(|key, data| {
            let mut row = key_cells(key);
            row.push(data.matched.to_string());
            row.push(data.comments.clone());
            row
        });
        align_columns(&HEADER, &rows)
    }

    /// Render one row per metric with both sides' avg, std-dev and max
    ///
    /// Statistics are shown as last computed; NaN means no data (or never computed).
    pub fn render_stats_table(&self) -> String {
        let rows = self.sorted_rows(|key, data| {
            let mut row = key_cells(key);
            for stats in [&data.left, &data.right] {
                row.push(format!("{:.2}", stats.avg));
                row.push(format!("{:.2}", stats.std_dev));
                row.push(format!("{:.2}", stats.max));
            }
            row
        });
        align_columns(&STATS_HEADER, &rows)
    }

    /// Print the comparison table with columns aligned
    pub fn pretty_print(&self, sink: &mut dyn DiagnosticSink) {
        sink.write_message(&self.render_table());
    }

    // Rows are sorted by key so repeated dumps of the same table are identical.
    fn sorted_rows<F>(&self, to_row: F) -> Vec<Vec<String>>
    where
        F: Fn(&MetricKey, &MetricComparisonData) -> Vec<String>,
    {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(key, data)| to_row(key, data))
            .collect()
    }
}

fn key_cells(key: &MetricKey) -> Vec<String> {
    vec![
        key.test_name.clone(),
        key.verb.clone(),
        key.resource.clone(),
        key.subresource.clone(),
        key.percentile.clone(),
    ]
}

fn align_columns(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let header_row: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();
    for row in std::iter::once(&header_row).chain(rows) {
        let last = row.len().saturating_sub(1);
        for (i, cell) in row.iter().enumerate() {
            output.push_str(cell);
            if i < last {
                let pad = widths[i] + COLUMN_PADDING - cell.chars().count();
                output.extend(std::iter::repeat(' ').take(pad));
            }
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::key::Side;

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = JobComparisonData::new();
        let rendered = table.render_table();

        assert_eq!(rendered.lines().count(), 1);
        assert_eq!(
            rendered,
            "E2E TEST  VERB  RESOURCE  SUBRESOURCE  PERCENTILE  MATCHED?  COMMENTS\n"
        );
    }

    #[test]
    fn test_columns_are_aligned() {
        let mut table = JobComparisonData::new();
        table.add_sample(1.0, MetricKey::new("Density", "LIST", "pods", "", "Perc50"), Side::Left);
        table.add_sample(
            1.0,
            MetricKey::new("Load Capacity", "PUT", "nodes", "status", "Perc99"),
            Side::Left,
        );

        let rendered = table.render_table();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "E2E TEST       VERB  RESOURCE  SUBRESOURCE  PERCENTILE  MATCHED?  COMMENTS"
        );
        assert_eq!(
            lines[1],
            "Density        LIST  pods                   Perc50      false     "
        );
        assert_eq!(
            lines[2],
            "Load Capacity  PUT   nodes     status       Perc99      false     "
        );
    }

    #[test]
    fn test_matched_and_comments_rendered() {
        let key = MetricKey::new("Density", "GET", "nodes", "", "Perc90");
        let mut table = JobComparisonData::new();
        table.add_sample(1.0, key.clone(), Side::Right);
        {
            let data = table.get_mut(&key).unwrap();
            data.matched = true;
            data.comments = "AvgL=1 AvgR=1".to_string();
        }

        let rendered = table.render_table();
        assert!(rendered.lines().nth(1).unwrap().ends_with("true      AvgL=1 AvgR=1"));
    }

    #[test]
    fn test_pretty_print_writes_to_sink() {
        let mut table = JobComparisonData::new();
        table.add_sample(1.0, MetricKey::new("Density", "LIST", "pods", "", "Perc50"), Side::Left);

        let mut sink: Vec<String> = Vec::new();
        table.pretty_print(&mut sink);
        table.pretty_print(&mut sink);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], sink[1]);
        assert_eq!(sink[0].lines().count(), 2);
    }

    #[test]
    fn test_stats_table_shows_nan_for_missing_side() {
        let key = MetricKey::new("Density", "LIST", "pods", "", "Perc50");
        let mut table = JobComparisonData::new();
        table.add_sample(10.0, key.clone(), Side::Left);
        table.add_sample(20.0, key, Side::Left);
        table.compute_stats();

        let rendered = table.render_stats_table();
        let row = rendered.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(
            cells,
            vec!["Density", "LIST", "pods", "Perc50", "15.00", "5.00", "20.00", "NaN", "NaN", "NaN"]
        );
    }

    #[test]
    fn test_align_columns_counts_chars_not_bytes() {
        let rows = vec![vec!["μs".to_string(), "x".to_string()]];
        let rendered = align_columns(&["A", "B"], &rows);
        assert_eq!(rendered, "A   B\nμs  x\n");
    }
}
