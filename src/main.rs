// src/main.rs
mod chart;
mod config;
mod dataset;
mod error;
mod indicators;
mod pipeline;
mod selection;

use anyhow::Context;
use clap::Parser;
use config::AppConfig;
use error::AppError;
use selection::{EntrySelector, StdinSelector};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Computes the MACD indicator from daily close prices and renders it as a PNG")]
struct Cli {
    /// Path to a CSV file with Date (YYYY-MM-DD) and Close columns
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        let code = err
            .downcast_ref::<AppError>()
            .map(AppError::exit_code)
            .unwrap_or(1);
        if code == 1 {
            // load-time failures collapse into one user-facing diagnostic
            eprintln!(
                "Data sample is too small or the provided path is invalid, \
                 please provide correct data."
            );
        }
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = AppConfig::new().map_err(AppError::from)?;
    let params = pipeline::MacdParams::from(&cfg.macd);

    let points = dataset::load_csv(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    dataset::check_min_entries(&points, params.min_entries)?;

    let mut selector = StdinSelector;
    let selected = selector.select(params.min_entries, points.len())?;
    let points = selection::take_first(points, selected);
    info!("Analyzing the earliest {} entries", selected);

    let analysis = pipeline::run(&points, &params)?;
    info!(
        "Shorter period: {} | Greater period: {} | MACD: {} | SIGNAL: {} | Crossovers: {}",
        analysis.short_ema.len(),
        analysis.long_ema.len(),
        analysis.macd.len(),
        analysis.signal.len(),
        analysis.crossovers.len()
    );

    let out_path = PathBuf::from(chart::output_filename(selected));
    chart::render(&analysis, selected, &cfg.chart, &out_path)
        .with_context(|| format!("failed to render {}", out_path.display()))?;

    println!("Chart written to {}", out_path.display());
    Ok(())
}
