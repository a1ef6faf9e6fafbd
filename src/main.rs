//! SKU Coverage - Binary Entry Point
//!
//! Loads a JSON workload, runs the exhaustive simulation and prints the
//! winners for every SKU count. Logging is configured through `RUST_LOG`
//! (default `info`) and goes to stderr; the report goes to stdout.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use sku_coverage::engine::{ExecutionMode, Simulator, SimulatorConfig, DEFAULT_BATCH_SIZE};
use sku_coverage::input::Workload;
use sku_coverage::report::SimulationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sku-coverage")]
#[command(about = "Find the SKU subsets that fulfill the most orders, for every subset size")]
#[command(version)]
struct Cli {
    /// Workload file (JSON with `skus` and `orders`)
    input: PathBuf,

    /// Evaluate each subset family on a worker pool
    #[arg(long)]
    parallel: bool,

    /// Worker count for --parallel (defaults to one per core)
    #[arg(long, env = "SKU_COVERAGE_WORKERS")]
    workers: Option<usize>,

    /// Subsets per work batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Stop after this many stocked SKUs
    #[arg(long)]
    max_skus: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn simulator_config(&self) -> SimulatorConfig {
        let execution = if self.parallel {
            ExecutionMode::Parallel {
                workers: self.workers,
            }
        } else {
            ExecutionMode::Sequential
        };
        SimulatorConfig::default()
            .with_execution(execution)
            .with_batch_size(self.batch_size)
            .with_max_sku_count(self.max_skus)
    }
}

fn run(cli: Cli) -> Result<()> {
    let workload = Workload::from_path(&cli.input)
        .with_context(|| format!("failed to read workload {}", cli.input.display()))?;
    let (catalog, orders) = workload
        .into_model()
        .context("failed to resolve workload")?;
    info!(
        "Loaded {} skus and {} orders from {}",
        catalog.len(),
        orders.len(),
        cli.input.display()
    );

    let config = cli.simulator_config();
    debug!("Simulator config: {:?}", config);
    let simulator = Simulator::new(config).context("invalid simulator configuration")?;

    let start = Instant::now();
    let outcome = simulator
        .run_with_observer(&catalog, &orders, |summary| {
            info!(
                "Calculated results for {} skus: {} fulfillable orders, {} tied subsets",
                summary.sku_count,
                summary.fulfillable_orders(),
                summary.best.len()
            );
            debug!(
                "Evaluated {} subsets; discarded {} orders with more than {} skus",
                summary.subsets_evaluated, summary.orders_discarded, summary.sku_count
            );
        })
        .context("simulation failed")?;
    info!("Simulation finished in {:.2?}", start.elapsed());

    let report = SimulationReport::new(&outcome, &catalog);
    info!("Report digest: {}", report.digest_hex());

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json().context("failed to encode report")?),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
