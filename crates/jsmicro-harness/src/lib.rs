//! Benchmark runner for the jsmicro suite.
//!
//! Takes entries out of a [`Registry`](jsmicro_core::Registry), times them
//! according to a [`RunConfig`], and collects the results into a
//! [`Report`]. The `jsmicro` binary wraps this in a small CLI.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod measurement;
pub mod report;
pub mod runner;

pub use config::{ConfigError, RunConfig};
pub use error::RunError;
pub use measurement::Measurement;
pub use report::{listing, Report};
pub use runner::{run_entry, run_selected};
