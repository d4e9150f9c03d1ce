//! Timed execution of registered benchmarks.
//!
//! Each entry point is invoked `warmup` times untimed, then `samples`
//! times under [`Instant`]. Every returned value goes through
//! [`black_box`] so the work cannot be discarded.

use std::hint::black_box;
use std::time::Instant;

use jsmicro_core::{BenchEntry, BenchValue, Registry};

use crate::config::{ConfigError, RunConfig};
use crate::error::RunError;
use crate::measurement::{saturating_u64, Measurement};
use crate::report::Report;

/// Measure one benchmark.
pub fn run_entry(entry: &BenchEntry, config: &RunConfig) -> Result<Measurement, ConfigError> {
    config.validate()?;

    for _ in 0..config.warmup {
        black_box(entry.run());
    }

    let mut samples = Vec::with_capacity(config.samples as usize);
    let mut value = BenchValue::Undefined;
    for i in 0..config.samples {
        let start = Instant::now();
        value = black_box(entry.run());
        let elapsed = start.elapsed();
        tracing::debug!(
            name = entry.name(),
            sample = i,
            elapsed_ns = saturating_u64(elapsed.as_nanos()),
            "sample"
        );
        samples.push(elapsed);
    }

    let measurement = Measurement {
        name: entry.name().to_owned(),
        description: entry.description().to_owned(),
        samples,
        value,
    };
    tracing::info!(
        name = %measurement.name,
        mean_us = saturating_u64(measurement.mean().as_micros()),
        value = %measurement.value,
        "benchmark finished"
    );
    Ok(measurement)
}

/// Measure the named benchmarks, or all of them when `names` is empty.
///
/// Selection and configuration are checked before anything runs.
pub fn run_selected<S: AsRef<str>>(
    registry: &Registry,
    names: &[S],
    config: &RunConfig,
) -> Result<Report, RunError> {
    config.validate()?;
    let selected = registry.select(names)?;

    let mut report = Report::new("jsmicro");
    for entry in selected {
        report.push(run_entry(entry, config)?);
    }
    Ok(report)
}
