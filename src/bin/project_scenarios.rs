//! Project token supply and active nodes for every scenario in a catalog
//!
//! Prints the end-of-horizon summary and optionally writes trajectory and
//! chart-series CSVs for plotting.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::info;

use supply_projection::params::{load_catalog_csv, load_run_file, RunParams};
use supply_projection::report::{
    horizon_label, render_summary_table, write_series_csv, write_trajectories_csv, RunReport,
    SeriesMetric,
};
use supply_projection::{GlobalConstants, ScenarioCatalog, ScenarioRunner, DEFAULT_HORIZON_MONTHS};

#[derive(Debug, Parser)]
#[command(name = "project_scenarios", about = "Token supply and node population projections")]
struct Args {
    /// JSON run file (constants, horizon, scenarios)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV scenario catalog; replaces the run file's scenarios
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Projection horizon in months; overrides the run file
    #[arg(long, allow_negative_numbers = true)]
    months: Option<i64>,

    /// Project scenarios on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Directory for trajectory and chart-series CSVs
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Calendar date of month 0, used to label CSV periods (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Print the full JSON report instead of the summary table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let mut params = match &args.config {
        Some(path) => load_run_file(path)
            .with_context(|| format!("loading run file {}", path.display()))?,
        None => RunParams {
            constants: GlobalConstants::default(),
            horizon_months: DEFAULT_HORIZON_MONTHS as i64,
            catalog: ScenarioCatalog::reference(),
        },
    };
    if let Some(path) = &args.scenarios {
        params.catalog = load_catalog_csv(path)
            .with_context(|| format!("loading scenario catalog {}", path.display()))?;
    }
    if let Some(months) = args.months {
        params.horizon_months = months;
    }

    let runner = ScenarioRunner::new(params.constants, params.horizon_months)
        .context("invalid run parameters")?;
    let horizon = runner.engine().config().horizon_months;

    let results = if args.parallel {
        runner.run_parallel(&params.catalog)
    } else {
        runner.run(&params.catalog)
    };

    if args.json {
        RunReport::new(params.constants, horizon, &results)
            .write_json(io::stdout().lock())
            .context("writing JSON report")?;
        println!();
    } else {
        println!("\n=== {} summary ===", horizon_label(horizon));
        print!("{}", render_summary_table(&results.summaries(), horizon));

        for (name, err) in results.failures() {
            println!("  skipped {}: {}", name, err);
        }
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let path = dir.join("trajectories.csv");
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_trajectories_csv(BufWriter::new(file), &results, args.start_date)
            .with_context(|| format!("writing {}", path.display()))?;

        for metric in [SeriesMetric::Supply, SeriesMetric::ActiveNodes] {
            let path = dir.join(metric.file_name());
            let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            write_series_csv(BufWriter::new(file), &results, metric)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        info!("Output written to {}", dir.display());
    }

    info!("Total time: {:?}", start.elapsed());
    Ok(())
}
