//! Benchmark inputs for the jsmicro criterion benchmarks.
//!
//! - [`SUBJECT_LENGTHS`]: subject sizes swept by the scaling bench
//! - [`subject_of_len`]: a subject whose only target character is its last

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use jsmicro_cases::string_index_of_2::{SUBJECT, TARGET};

/// Subject sizes, in bytes, for the search-scaling bench. 62 is the
/// registered case's own subject.
pub const SUBJECT_LENGTHS: [usize; 4] = [8, 62, 512, 4096];

/// Build a `len`-byte ASCII subject with [`TARGET`] only at the end.
///
/// The prefix cycles through the registered subject's other characters,
/// so `subject_of_len(62)` reproduces that subject exactly. Returns an
/// empty string for `len == 0`.
pub fn subject_of_len(len: usize) -> String {
    if len == 0 {
        return String::new();
    }
    let mut s: String = SUBJECT
        .chars()
        .filter(|&c| c != TARGET)
        .cycle()
        .take(len - 1)
        .collect();
    s.push(TARGET);
    s
}
