// src/dataset.rs
use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One dated observation. Every series in the pipeline (price, EMA, MACD,
/// signal) is a `Vec<SeriesPoint>` ordered ascending by date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Raw CSV row. Extra columns in the file are ignored; `Date` and `Close`
/// are required by header name.
#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Close")]
    close: f64,
}

/// Loads a close-price series from a CSV file with `Date` (YYYY-MM-DD) and
/// `Close` columns. Rows must already be sorted ascending by date with no
/// duplicates; violations fail with `InputParse`.
pub fn load_csv(path: &Path) -> Result<Vec<SeriesPoint>> {
    info!("Loading price data from {}", path.display());
    let file = std::fs::File::open(path)?;
    let points = read_rows(file)?;
    debug!("Loaded {} rows from {}", points.len(), path.display());
    Ok(points)
}

/// Reader-level parse so tests can feed in-memory CSV without touching disk.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SeriesPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();

    for row in csv_reader.deserialize::<PriceRow>() {
        let row = row?;
        points.push(SeriesPoint {
            date: row.date,
            value: row.close,
        });
    }

    validate_ordering(&points)?;
    Ok(points)
}

/// The pipeline relies on a strictly increasing date axis; duplicates and
/// out-of-order rows are load-time failures.
fn validate_ordering(points: &[SeriesPoint]) -> Result<()> {
    for pair in points.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err(AppError::InputParse(format!(
                "dates must be strictly ascending: {} followed by {}",
                pair[0].date, pair[1].date
            )));
        }
    }
    Ok(())
}

/// Rejects series too short for analysis before any selection is offered.
pub fn check_min_entries(points: &[SeriesPoint], min_entries: usize) -> Result<()> {
    if points.len() < min_entries {
        return Err(AppError::InsufficientData {
            required: min_entries,
            actual: points.len(),
        });
    }
    Ok(())
}
