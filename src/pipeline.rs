// src/pipeline.rs
use crate::config::MacdConfig;
use crate::dataset::SeriesPoint;
use crate::error::{AppError, Result};
use crate::indicators::{align_trailing, compute_ema, subtract};
use tracing::{debug, info};

/// Period lengths and the minimum series length accepted for analysis.
#[derive(Debug, Clone, Copy)]
pub struct MacdParams {
    pub short_period: usize,
    pub long_period: usize,
    pub signal_period: usize,
    pub min_entries: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            short_period: 12,
            long_period: 26,
            signal_period: 9,
            min_entries: 120,
        }
    }
}

impl From<&MacdConfig> for MacdParams {
    fn from(cfg: &MacdConfig) -> Self {
        Self {
            short_period: cfg.short_period,
            long_period: cfg.long_period,
            signal_period: cfg.signal_period,
            min_entries: cfg.min_entries,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossDirection {
    /// MACD crosses above the signal line.
    Bullish,
    /// MACD crosses below the signal line.
    Bearish,
}

/// A MACD/signal crossover at a concrete date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossover {
    pub date: chrono::NaiveDate,
    pub macd: f64,
    pub signal: f64,
    pub direction: CrossDirection,
}

/// Immutable result bundle: the raw prices the analysis ran on plus every
/// derived series, written once and never mutated.
#[derive(Debug, Clone)]
pub struct MacdAnalysis {
    pub price: Vec<SeriesPoint>,
    pub short_ema: Vec<SeriesPoint>,
    pub long_ema: Vec<SeriesPoint>,
    pub macd: Vec<SeriesPoint>,
    pub signal: Vec<SeriesPoint>,
    pub crossovers: Vec<Crossover>,
}

/// Derives the full MACD bundle from a close-price series.
///
/// Short and long EMAs are computed over the prices, aligned on their common
/// trailing range and subtracted to form the MACD line; the signal line is an
/// EMA over the MACD values. Fails with `InsufficientData` when the input is
/// shorter than `min_entries` or any period's lookback.
pub fn run(price: &[SeriesPoint], params: &MacdParams) -> Result<MacdAnalysis> {
    if price.len() < params.min_entries {
        return Err(AppError::InsufficientData {
            required: params.min_entries,
            actual: price.len(),
        });
    }

    let short_ema = compute_ema(price, params.short_period)?;
    let long_ema = compute_ema(price, params.long_period)?;

    let (short_tail, long_tail) = align_trailing(&short_ema, &long_ema);
    let macd = subtract(short_tail, long_tail)?;

    let signal = compute_ema(&macd, params.signal_period)?;

    let crossovers = find_crossovers(&macd, &signal);
    debug!(
        "Derived series lengths: short={} long={} macd={} signal={} crossovers={}",
        short_ema.len(),
        long_ema.len(),
        macd.len(),
        signal.len(),
        crossovers.len()
    );

    Ok(MacdAnalysis {
        price: price.to_vec(),
        short_ema,
        long_ema,
        macd,
        signal,
        crossovers,
    })
}

/// Scans the aligned MACD/signal pair for points where their difference
/// changes sign between consecutive entries.
pub fn find_crossovers(macd: &[SeriesPoint], signal: &[SeriesPoint]) -> Vec<Crossover> {
    let (macd, signal) = align_trailing(macd, signal);
    let mut crossovers = Vec::new();

    for i in 1..macd.len() {
        let prev = macd[i - 1].value - signal[i - 1].value;
        let curr = macd[i].value - signal[i].value;

        if prev < 0.0 && curr > 0.0 {
            crossovers.push(Crossover {
                date: macd[i].date,
                macd: macd[i].value,
                signal: signal[i].value,
                direction: CrossDirection::Bullish,
            });
        } else if prev > 0.0 && curr < 0.0 {
            crossovers.push(Crossover {
                date: macd[i].date,
                macd: macd[i].value,
                signal: signal[i].value,
                direction: CrossDirection::Bearish,
            });
        }
    }

    for c in &crossovers {
        info!(
            "{:?} crossover on {} (macd={:.4}, signal={:.4})",
            c.direction, c.date, c.macd, c.signal
        );
    }

    crossovers
}
