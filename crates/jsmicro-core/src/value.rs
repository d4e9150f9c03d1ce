//! The value an entry point returns to the harness.

use std::fmt;

/// Result of a single entry-point invocation.
///
/// The harness never inspects this beyond reporting it; its purpose is to
/// keep the benchmarked computation observable so it cannot be eliminated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BenchValue {
    /// The entry point produced nothing.
    #[default]
    Undefined,
    /// Outcome of a search: the 0-based position of the match, if any.
    Index(Option<usize>),
}

impl fmt::Display for BenchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Index(Some(idx)) => write!(f, "{idx}"),
            // A miss prints the way `indexOf` reports it.
            Self::Index(None) => write!(f, "-1"),
        }
    }
}

impl From<Option<usize>> for BenchValue {
    fn from(v: Option<usize>) -> Self {
        Self::Index(v)
    }
}
