use std::path::PathBuf;

use anyhow::{Context, Result};
use biaspower::{PowerCurve, PowerView, Strategy, Tail, load_settings};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Prints detection-probability curves for a study with the given sample
/// size and bias, as JSON series ready for charting.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of observations in the hypothetical study
    #[arg(long, short = 'n')]
    sample_size: Option<usize>,

    /// Systematic shift added to every true effect size
    #[arg(long, short)]
    bias: Option<f64>,

    /// Simulate instead of using the analytic approximation
    #[arg(long)]
    monte_carlo: bool,

    /// Seed for the simulation (unseeded if omitted)
    #[arg(long, requires = "monte_carlo")]
    seed: Option<u64>,

    /// Add the lower tail to the detection probability
    #[arg(long)]
    two_sided: bool,

    /// Settings file (defaults to ./biaspower.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct ChartData<'a> {
    sample_size: usize,
    bias: f64,
    x_label: &'static str,
    y_label: &'static str,
    curves: &'a [PowerCurve],
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    if cli.monte_carlo {
        settings.simulation.monte_carlo = true;
    }
    if cli.seed.is_some() {
        settings.simulation.seed = cli.seed;
    }
    if cli.two_sided {
        settings.tail = Tail::TwoSided;
    }

    let mut view = PowerView::new(settings).context("failed to set up view")?;
    if let Some(sample_size) = cli.sample_size {
        view.set_sample_size(sample_size)?;
    }
    if let Some(bias) = cli.bias {
        view.set_bias(bias)?;
    }

    let strategy = match view.strategy() {
        Strategy::Analytic => "analytic",
        Strategy::MonteCarlo { .. } => "monte carlo",
    };
    info!(
        sample_size = view.sample_size(),
        bias = view.bias(),
        strategy,
        grid_points = view.grid().len(),
        "computed curves"
    );

    let chart = ChartData {
        sample_size: view.sample_size(),
        bias: view.bias(),
        x_label: "True Effect Size (d)",
        y_label: "Probability of Detecting an Effect",
        curves: view.curves(),
    };
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
