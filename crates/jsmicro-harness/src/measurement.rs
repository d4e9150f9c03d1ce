//! Timing samples collected for one benchmark.

use std::time::Duration;

use jsmicro_core::BenchValue;

/// Per-sample wall-clock timings for a single benchmark, plus the value
/// its entry point returned on the final invocation.
#[derive(Clone, Debug)]
pub struct Measurement {
    /// Registry name of the benchmark.
    pub name: String,
    /// Description carried from the registry.
    pub description: String,
    /// One duration per timed invocation, in run order.
    pub samples: Vec<Duration>,
    /// Value returned by the last invocation.
    pub value: BenchValue,
}

impl Measurement {
    /// Sum of all samples.
    pub fn total(&self) -> Duration {
        self.samples.iter().sum()
    }

    /// Arithmetic mean; zero when there are no samples.
    pub fn mean(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        let nanos = self.total().as_nanos() / self.samples.len() as u128;
        Duration::from_nanos(saturating_u64(nanos))
    }

    /// Median sample; the lower middle for an even count.
    pub fn median(&self) -> Duration {
        let mut sorted = self.samples.clone();
        sorted.sort_unstable();
        match sorted.len() {
            0 => Duration::ZERO,
            n => sorted[(n - 1) / 2],
        }
    }

    /// Fastest sample.
    pub fn min(&self) -> Duration {
        self.samples.iter().copied().min().unwrap_or_default()
    }

    /// Slowest sample.
    pub fn max(&self) -> Duration {
        self.samples.iter().copied().max().unwrap_or_default()
    }
}

/// Narrow a `Duration::as_*` figure, clamping instead of truncating.
pub(crate) fn saturating_u64(v: u128) -> u64 {
    u64::try_from(v).unwrap_or(u64::MAX)
}
