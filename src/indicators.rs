// src/indicators.rs
use crate::dataset::SeriesPoint;
use crate::error::{AppError, Result};

/// Seeded EMA and trailing alignment used to build the MACD series.
/// Deterministic, single forward pass per series.

/// Smoothing constant for the given period length.
pub fn smoothing_constant(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Computes an exponential moving average over `series`.
///
/// Output index 0 is the arithmetic mean of the first `period` values (the
/// seed), dated at the period-th source date. Each later entry follows the
/// recurrence `ema = value * alpha + prev * (1 - alpha)` with
/// `alpha = 2 / (period + 1)`, so the output has `len - period + 1` entries.
pub fn compute_ema(series: &[SeriesPoint], period: usize) -> Result<Vec<SeriesPoint>> {
    if period == 0 {
        return Err(AppError::InvalidPeriod(period));
    }
    if series.len() < period {
        return Err(AppError::InsufficientData {
            required: period,
            actual: series.len(),
        });
    }

    let alpha = smoothing_constant(period);
    let mut out = Vec::with_capacity(series.len() - period + 1);

    let seed: f64 = series[..period].iter().map(|p| p.value).sum::<f64>() / period as f64;
    out.push(SeriesPoint {
        date: series[period - 1].date,
        value: seed,
    });

    let mut prev = seed;
    for point in &series[period..] {
        let ema = point.value * alpha + prev * (1.0 - alpha);
        out.push(SeriesPoint {
            date: point.date,
            value: ema,
        });
        prev = ema;
    }

    Ok(out)
}

/// Truncates the longer of the two series from the front so both cover the
/// same trailing date range. Equal lengths come back unchanged.
pub fn align_trailing<'a>(
    a: &'a [SeriesPoint],
    b: &'a [SeriesPoint],
) -> (&'a [SeriesPoint], &'a [SeriesPoint]) {
    if a.len() > b.len() {
        (&a[a.len() - b.len()..], b)
    } else if b.len() > a.len() {
        (a, &b[b.len() - a.len()..])
    } else {
        (a, b)
    }
}

/// Elementwise difference of two aligned series. The inputs are built from
/// the same price axis, so matching dates are an invariant; a mismatch means
/// a caller skipped alignment.
pub fn subtract(a: &[SeriesPoint], b: &[SeriesPoint]) -> Result<Vec<SeriesPoint>> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            if x.date != y.date {
                return Err(AppError::MisalignedSeries(format!(
                    "{} paired with {}",
                    x.date, y.date
                )));
            }
            Ok(SeriesPoint {
                date: x.date,
                value: x.value - y.value,
            })
        })
        .collect()
}
