// src/chart.rs
use crate::config::ChartConfig;
use crate::dataset::SeriesPoint;
use crate::error::{AppError, Result};
use crate::pipeline::MacdAnalysis;
use chrono::NaiveDate;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// X-axis tick spacing in days for the given entry count. Steps widen at
/// 240/480/960/1440/1920 entries so labels stay readable on long series.
pub fn tick_step(entry_count: usize) -> usize {
    if entry_count < 240 {
        5
    } else if entry_count <= 480 {
        10
    } else if entry_count <= 960 {
        15
    } else if entry_count <= 1440 {
        20
    } else if entry_count <= 1920 {
        25
    } else {
        30
    }
}

/// Conventional output name for a run over `entry_count` entries.
pub fn output_filename(entry_count: usize) -> String {
    format!("macd-{}.png", entry_count)
}

/// Renders the price panel above the MACD/signal panel into a PNG file.
///
/// The visible window is the trailing `signal.len()` entries of every
/// series, so both panels share identical date coordinates.
pub fn render(
    analysis: &MacdAnalysis,
    selected_entries: usize,
    cfg: &ChartConfig,
    out_path: &Path,
) -> Result<()> {
    let visible = analysis.signal.len();
    let price = tail(&analysis.price, visible);
    let macd = tail(&analysis.macd, visible);
    let signal = &analysis.signal[..];

    let step = tick_step(selected_entries);
    let ticks = (visible / step).max(1);
    let width = (ticks as u32 * cfg.px_per_tick).max(640);

    let x_range = price[0].date..price[visible - 1].date;
    let label_count = ticks + 1;

    let root = BitMapBackend::new(out_path, (width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let (upper, lower) = root.split_vertically((cfg.height / 2) as i32);

    draw_panel(
        &upper,
        &format!("Close price ({} days)", visible),
        &format!("Time ({} days)", step),
        "Close value ($)",
        x_range.clone(),
        label_count,
        &[(price, &BLACK, "Close")],
    )?;

    draw_panel(
        &lower,
        &format!("MACD ({} days)", visible),
        &format!("Time ({} days)", step),
        "EMA",
        x_range,
        label_count,
        &[(macd, &BLUE, "MACD"), (signal, &RED, "SIGNAL")],
    )?;

    root.present().map_err(render_err)?;
    info!("Chart written to {}", out_path.display());
    Ok(())
}

fn tail(points: &[SeriesPoint], n: usize) -> &[SeriesPoint] {
    &points[points.len() - n..]
}

fn render_err<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Render(err.to_string())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    x_range: std::ops::Range<NaiveDate>,
    label_count: usize,
    series: &[(&[SeriesPoint], &RGBColor, &str)],
) -> Result<()> {
    let (y_min, y_max) = value_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(label_count)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()
        .map_err(render_err)?;

    for (points, color, name) in series {
        let color = **color;
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.date, p.value)),
                &color,
            ))
            .map_err(render_err)?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn value_bounds(series: &[(&[SeriesPoint], &RGBColor, &str)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (points, _, _) in series {
        for p in *points {
            min = min.min(p.value);
            max = max.max(p.value);
        }
    }
    // pad so flat series still get a drawable range
    let pad = ((max - min) * 0.05).max(1e-6);
    (min - pad, max + pad)
}
