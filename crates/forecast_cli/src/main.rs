//! Thin command-line runner around `forecast_core`: load a YAML
//! configuration, validate it, run every active scenario, and print the
//! resulting balance trajectory (plus an emergency-fund recommendation).

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use forecast_core::calendar::Month;
use forecast_core::model::Configuration;
use forecast_core::{emergency_fund, forecast_engine, validator, TracingLogger};

mod report;

#[derive(Parser, Debug)]
#[command(name = "forecast")]
#[command(about = "Run the long-horizon personal-finance forecast engine")]
struct Args {
    /// Path to the YAML configuration file.
    config: PathBuf,

    /// Simulation start month (YYYY-MM). Defaults to the current calendar
    /// month; pass this explicitly to reproduce a forecast at a fixed
    /// point in time.
    #[arg(long)]
    start: Option<String>,

    /// RNG seed for the emergency-fund bootstrap sampler.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write each scenario's month-by-month ledger to
    /// `<dir>/<scenario>.csv` instead of printing a summary table.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Log level for tracing output (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(&args.log_level);

    let contents = fs::read_to_string(&args.config)?;
    let mut config: Configuration = serde_saphyr::from_str(&contents)
        .map_err(|err| color_eyre::eyre::eyre!("failed to parse {}: {err}", args.config.display()))?;

    let start = match args.start {
        Some(label) => Month::parse(&label)?,
        None => current_month(),
    };

    config.prepare(start)?;

    let warnings = validator::validate(&config);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let forecasts = forecast_engine::run(&config, start, &TracingLogger)?;
    if forecasts.is_empty() {
        println!("no active scenarios; nothing to report");
        return Ok(());
    }

    for forecast in &forecasts {
        let estimate = emergency_fund::estimate(
            forecast,
            config.common_starting_value(),
            config.emergency_fund_months_target(),
            args.seed,
        );

        if let Some(dir) = &args.csv_dir {
            report::write_csv(dir, forecast)?;
        } else {
            report::print_summary(forecast, &estimate);
        }
    }

    Ok(())
}

fn init_logging(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The current calendar month, per §6's "simulation start month is the
/// current calendar month at invocation" rule.
fn current_month() -> Month {
    let today = jiff::Zoned::now();
    Month::new(today.year() as i32, today.month() as u32)
}
