//! Top-level error for suite runs.

use std::error::Error;
use std::fmt;

use jsmicro_core::RegistryError;

use crate::config::ConfigError;

/// Errors from [`run_selected`](crate::runner::run_selected).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// Selecting benchmarks from the registry failed.
    Registry(RegistryError),
    /// The run configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(_) => write!(f, "registry error"),
            Self::Config(_) => write!(f, "config error"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<RegistryError> for RunError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
