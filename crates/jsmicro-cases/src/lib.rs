//! Micro-benchmark cases for the jsmicro harness.
//!
//! Each case lives in its own module exposing `NAME`, `DESC`, an `entry`
//! function, and a `register` function. [`register_all`] adds every case
//! to a registry; [`suite`] builds a fresh registry holding them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod string_index_of_2;

use jsmicro_core::{Registry, RegistryError};

/// Register every case in `registry`, in suite order.
pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    string_index_of_2::register(registry)?;
    Ok(())
}

/// Build a registry holding every case.
pub fn suite() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}

/// Register every case in the process-wide registry.
pub fn register_global() -> Result<(), RegistryError> {
    use string_index_of_2 as case;
    jsmicro_core::test(case::entry, case::NAME, case::DESC)?;
    Ok(())
}
