//! CLI argument parsing for Perfcompare

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_MIN_ALLOWED_REQUEST_COUNT;

#[derive(Parser, Debug)]
#[command(name = "perfcompare")]
#[command(version)]
#[command(about = "Compare benchmark latency percentiles between two jobs", long_about = None)]
pub struct Cli {
    /// JSON file with the left job's metrics (array of runs)
    #[arg(short = 'l', long = "left", value_name = "FILE")]
    pub left: PathBuf,

    /// JSON file with the right job's metrics (array of runs)
    #[arg(short = 'r', long = "right", value_name = "FILE")]
    pub right: PathBuf,

    /// Discard latency items measured over fewer requests than this
    #[arg(
        long = "min-request-count",
        value_name = "COUNT",
        default_value_t = DEFAULT_MIN_ALLOWED_REQUEST_COUNT,
        allow_negative_numbers = true
    )]
    pub min_request_count: i64,

    /// Also print avg, std-dev and max of both jobs for every metric
    #[arg(short = 's', long = "stats")]
    pub stats: bool,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_job_files() {
        let cli = Cli::parse_from(["perfcompare", "--left", "a.json", "--right", "b.json"]);
        assert_eq!(cli.left, PathBuf::from("a.json"));
        assert_eq!(cli.right, PathBuf::from("b.json"));
        assert_eq!(cli.min_request_count, 10);
        assert!(!cli.stats);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["perfcompare", "-l", "a.json", "-r", "b.json", "-s"]);
        assert!(cli.stats);
    }

    #[test]
    fn test_cli_min_request_count() {
        let cli = Cli::parse_from([
            "perfcompare",
            "--left",
            "a.json",
            "--right",
            "b.json",
            "--min-request-count",
            "50",
        ]);
        assert_eq!(cli.min_request_count, 50);
    }

    #[test]
    fn test_cli_negative_min_request_count_parses() {
        // Rejected later by CompareConfig::validate, not by the parser
        let cli = Cli::parse_from([
            "perfcompare",
            "-l",
            "a.json",
            "-r",
            "b.json",
            "--min-request-count",
            "-5",
        ]);
        assert_eq!(cli.min_request_count, -5);
    }

    #[test]
    fn test_cli_requires_both_jobs() {
        assert!(Cli::try_parse_from(["perfcompare", "--left", "a.json"]).is_err());
        assert!(Cli::try_parse_from(["perfcompare"]).is_err());
    }

    #[test]
    fn test_cli_debug_flag() {
        let cli = Cli::parse_from(["perfcompare", "-l", "a", "-r", "b", "--debug"]);
        assert!(cli.debug);
    }
}
