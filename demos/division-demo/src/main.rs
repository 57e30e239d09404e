//! division-demo
//!
//! Divides a dividend by each configured divisor. A zero divisor comes back
//! as a failure value and the loop carries on.
//!
//! Usage: `division-demo [config.toml]` (defaults to `division-demo.toml`
//! when present).

use anyhow::{Context, Result};
use fault::core::{TelemetryConfig, init_tracing};
use fault::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    dividend: f64,
    divisors: Vec<f64>,
    telemetry: TelemetryConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dividend: 7.0,
            divisors: vec![2.0, 0.0],
            telemetry: TelemetryConfig::default(),
        }
    }
}

fn load_config(path: Option<String>) -> Result<DemoConfig> {
    let path = path.unwrap_or_else(|| "division-demo.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(DemoConfig::default());
    }
    let source = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    toml::from_str(&source).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    let config = load_config(std::env::args().nth(1))?;
    init_tracing(&config.telemetry)?;

    let traced = Traced::new(|(a, b): (f64, f64)| divide(a, b), "divide");

    let mut failures = 0;
    for &divisor in &config.divisors {
        let result = traced.call((config.dividend, divisor));
        if is_failure(&result) {
            failures += 1;
        }
        match result {
            Ok(quotient) => println!("{} / {} = {}", config.dividend, divisor, quotient),
            Err(failure) => println!("{} / {}: {}", config.dividend, divisor, failure.message()),
        }
    }

    tracing::info!(total = config.divisors.len(), failures, "Done");
    Ok(())
}
