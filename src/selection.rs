// src/selection.rs
use crate::dataset::SeriesPoint;
use crate::error::{AppError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Supplies the number of entries to analyze. Keeps the console prompt out
/// of the pipeline so batch jobs and tests can inject the value directly.
pub trait EntrySelector {
    fn select(&mut self, min: usize, max: usize) -> Result<usize>;
}

/// Interactive selector: prints the acceptable range and re-prompts until
/// the user supplies an integer within it.
pub struct StdinSelector;

impl EntrySelector for StdinSelector {
    fn select(&mut self, min: usize, max: usize) -> Result<usize> {
        println!("Welcome, please enter number of entries you wish to analyse.");
        println!("Acceptable values range from {} to {}.", min, max);

        let stdin = std::io::stdin();
        let mut handle = stdin.lock();
        prompt_loop(&mut handle, &mut std::io::stdout(), min, max)
    }
}

/// Non-interactive selector: fails fast instead of re-prompting.
pub struct FixedSelector(pub usize);

impl EntrySelector for FixedSelector {
    fn select(&mut self, min: usize, max: usize) -> Result<usize> {
        if self.0 < min || self.0 > max {
            return Err(AppError::InvalidSelection {
                requested: self.0,
                min,
                max,
            });
        }
        Ok(self.0)
    }
}

fn prompt_loop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    min: usize,
    max: usize,
) -> Result<usize> {
    loop {
        write!(output, "Enter number of entries to load:\t")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed mid-prompt
            return Err(AppError::InvalidSelection {
                requested: 0,
                min,
                max,
            });
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            parsed => {
                if let Ok(n) = parsed {
                    debug!("Rejected out-of-range entry count: {}", n);
                }
                writeln!(
                    output,
                    "Invalid value, please enter value from range: [{}, {}]\n",
                    min, max
                )?;
            }
        }
    }
}

/// Keeps the earliest `n` entries; rows beyond `n` are dropped from the
/// tail, never the head.
pub fn take_first(mut points: Vec<SeriesPoint>, n: usize) -> Vec<SeriesPoint> {
    points.truncate(n);
    points
}

#[cfg(test)]
pub(crate) fn prompt_loop_for_tests<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    min: usize,
    max: usize,
) -> Result<usize> {
    prompt_loop(input, output, min, max)
}
