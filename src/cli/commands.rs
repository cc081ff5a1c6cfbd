//! Command implementations for the bikeshare explorer CLI
//!
//! Sets up logging and configuration, then runs either a single query or the
//! interactive session.

use crate::cli::args::Args;
use crate::cli::input::Prompter;
use crate::cli::session::Session;
use crate::config::ExplorerConfig;
use crate::filters::{parse_city, parse_day, parse_month};
use crate::loader::DataLoader;
use crate::models::FilterCriteria;
use crate::report::render_reports;
use crate::stats::compute_reports;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, info};

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    if args.is_interactive() {
        let stdin = io::stdin();
        let prompter = Prompter::new(stdin.lock(), io::stdout());
        Session::new(config, prompter)
            .run()
            .context("Interactive session failed")
    } else {
        run_single_query(&args, &config)
    }
}

/// Load, compute and print once for the filters given on the command line
fn run_single_query(args: &Args, config: &ExplorerConfig) -> Result<()> {
    let city = args.city.as_deref().unwrap_or_default();
    let criteria = FilterCriteria {
        city: parse_city(city)?,
        month: parse_month(&args.month)?,
        day: parse_day(&args.day)?,
    };
    info!(
        "Single query for {} ({}, {})",
        criteria.city, criteria.month, criteria.day
    );

    let dataset = match &args.file {
        Some(path) => DataLoader::load_path(path, criteria)
            .with_context(|| format!("Failed to load trips from {}", path.display()))?,
        None => DataLoader::new(config)
            .load_filtered(criteria)
            .with_context(|| format!("Failed to load trips for {}", criteria.city))?,
    };

    let reports = compute_reports(&dataset);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render_reports(&reports, config.show_timing))
        .context("Failed to write reports")?;
    Ok(())
}

/// Set up tracing; logs go to stderr so report text on stdout stays clean
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bikeshare_explorer={}", log_level)));

    // Ignore a second init (e.g. when run from tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Layer defaults, environment and command-line overrides
fn load_configuration(args: &Args) -> Result<ExplorerConfig> {
    let config = args.apply_overrides(ExplorerConfig::from_env());
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
