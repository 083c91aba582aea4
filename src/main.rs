use anyhow::Result;
use clap::Parser;
use perfcompare::cli::Cli;
use perfcompare::comparison::{flattened_comparison_data, TracingSink};
use perfcompare::config::CompareConfig;
use perfcompare::perftype;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; INFO by default so the comparison table is shown
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = CompareConfig::with_min_request_count(args.min_request_count);
    config.validate()?;

    let left_job_metrics = perftype::load_job_metrics(&args.left)?;
    let right_job_metrics = perftype::load_job_metrics(&args.right)?;

    let mut comparison = flattened_comparison_data(
        &left_job_metrics,
        &right_job_metrics,
        config.min_allowed_request_count,
    );
    comparison.compute_stats();
    comparison.pretty_print(&mut TracingSink);

    if args.stats {
        print!("{}", comparison.render_stats_table());
    }

    Ok(())
}
