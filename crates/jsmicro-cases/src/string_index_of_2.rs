//! `string-indexOf-2`: finding a character at the end of a long string.
//!
//! The subject is 62 characters and the target is its last one, so every
//! search scans the whole string before matching.

use std::hint::black_box;

use jsmicro_core::{BenchEntry, BenchValue, Registry, RegistryError};

/// Registry key.
pub const NAME: &str = "string-indexOf-2";

/// Report description.
pub const DESC: &str = "String.prototype.indexOf, finding character at the end of a long string";

/// Search subject.
pub const SUBJECT: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Character searched for.
pub const TARGET: char = '9';

/// Searches performed per entry-point invocation.
pub const ITERATIONS: usize = 100_000;

/// Entry point: run the search loop over [`SUBJECT`].
pub fn entry() -> BenchValue {
    BenchValue::from(search_repeatedly(SUBJECT))
}

/// Search `s` for [`TARGET`] [`ITERATIONS`] times and return the last result.
///
/// The loop always runs to completion. The returned index is a byte
/// offset, which equals the character index for ASCII input.
pub fn search_repeatedly(s: &str) -> Option<usize> {
    let mut last = None;
    for _ in 0..ITERATIONS {
        // Hides the loop-invariant input so each search really executes.
        last = black_box(s).find(TARGET);
    }
    last
}

/// Add this case to `registry`.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(BenchEntry::new(NAME, entry).with_description(DESC))
}
