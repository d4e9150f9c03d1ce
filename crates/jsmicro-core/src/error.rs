//! Error types for benchmark registration and lookup.

use std::error::Error;
use std::fmt;

/// Errors from [`Registry`](crate::Registry) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A benchmark was registered with an empty name.
    EmptyName,
    /// A benchmark with this name is already registered.
    ///
    /// The first registration is kept.
    DuplicateName {
        /// The name that was registered twice.
        name: String,
    },
    /// No benchmark is registered under this name.
    UnknownName {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "benchmark name must not be empty"),
            Self::DuplicateName { name } => write!(f, "benchmark '{name}' is already registered"),
            Self::UnknownName { name } => write!(f, "no benchmark named '{name}'"),
        }
    }
}

impl Error for RegistryError {}
