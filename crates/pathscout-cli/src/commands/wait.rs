use crate::OutputFormat;
use anyhow::{Context, Result};
use pathscout_core::{Config, TimingBounds, random_wait_time};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct WaitSamples {
    pub key: String,
    pub bounds: TimingBounds,
    pub samples: Vec<f64>,
}

pub fn execute(config_path: Option<&Path>, key: &str, samples: usize, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let result = sample(&config, key, samples);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Pretty => {
            for value in &result.samples {
                println!("{:.3}", value);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            tracing::debug!("No config given, using default timing");
            Ok(Config::empty())
        }
    }
}

/// Draw `count` delays (at least one) for `key`
pub fn sample(config: &Config, key: &str, count: usize) -> WaitSamples {
    let bounds = TimingBounds::resolve(config.as_value(), key);
    tracing::info!("Timing '{}' samples from {}s to {}s", key, bounds.min, bounds.max);

    let samples = (0..count.max(1))
        .map(|_| random_wait_time(config.as_value(), key))
        .collect();

    WaitSamples {
        key: key.to_string(),
        bounds,
        samples,
    }
}
