//! Run configuration and validation.

use std::error::Error;
use std::fmt;

/// How many times each benchmark entry point is invoked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Untimed invocations before sampling starts. Default: 1.
    pub warmup: u32,
    /// Timed invocations. Must be non-zero. Default: 10.
    pub samples: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            warmup: 1,
            samples: 10,
        }
    }
}

impl RunConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        Ok(())
    }
}

/// Errors detected during [`RunConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `samples` is zero, so nothing would be measured.
    ZeroSamples,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSamples => write!(f, "sample count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
