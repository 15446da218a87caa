// src/config.rs
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct MacdConfig {
    pub short_period: usize,
    pub long_period: usize,
    pub signal_period: usize,
    pub min_entries: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub height: u32,
    pub px_per_tick: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub macd: MacdConfig,
    pub chart: ChartConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // canonical MACD parameters; files and env override
            .set_default("macd.short_period", 12_i64)?
            .set_default("macd.long_period", 26_i64)?
            .set_default("macd.signal_period", 9_i64)?
            .set_default("macd.min_entries", 120_i64)?
            .set_default("chart.height", 1200_i64)?
            .set_default("chart.px_per_tick", 100_i64)?
            .add_source(File::new("config/default.toml", FileFormat::Toml).required(false))
            .add_source(
                File::new(&format!("config/{}.toml", run_mode), FileFormat::Toml).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
