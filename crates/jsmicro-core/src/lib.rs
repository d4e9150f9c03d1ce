//! Core types for the jsmicro benchmark suite.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the values an entry point hands back to the harness, the named
//! benchmark entries, and the registry the harness discovers them from:
//!
//! - [`BenchValue`]: the result returned by an entry point.
//! - [`BenchEntry`]: a name, description, and zero-argument entry point.
//! - [`Registry`]: registration-ordered set of entries.
//! - [`test()`] / [`with_global`]: the process-wide registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod value;

pub use error::RegistryError;
pub use registry::{test, with_global, BenchEntry, EntryPoint, Registry};
pub use value::BenchValue;
