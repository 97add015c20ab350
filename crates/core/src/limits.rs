//! Search and recency limits
//!
//! `MAX_SUPPORTED_TAG_LENGTH` sizes both the prefix comparison and the
//! per-query score buckets, so the two can never drift apart.

use serde::{Deserialize, Serialize};

/// Longest tag prefix that contributes to a match score.
///
/// Scores range over `0..=MAX_SUPPORTED_TAG_LENGTH`; a query allocates one
/// score bucket per non-zero score.
pub const MAX_SUPPORTED_TAG_LENGTH: usize = 8;

/// Default number of search results returned per query.
pub const DEFAULT_RESULT_CAP: usize = 100;

/// Recency capacity used by the manifest-driven deployment.
pub const DEFAULT_RECENT_CAPACITY: usize = 12;

/// Default random fill size for the default view.
pub const DEFAULT_SAMPLE_SIZE: usize = 32;

/// Default quiet period before a typed keyword is searched.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Upper bound on results returned by a search.
///
/// Serialized as a plain integer where `0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub enum ResultCap {
    /// Return at most this many results
    AtMost(usize),
    /// Return every scored candidate
    Unbounded,
}

impl ResultCap {
    /// Truncate a ranked list to this cap
    pub fn apply<T>(self, mut results: Vec<T>) -> Vec<T> {
        if let ResultCap::AtMost(n) = self {
            results.truncate(n);
        }
        results
    }

    /// Numeric limit, if bounded
    pub fn limit(self) -> Option<usize> {
        match self {
            ResultCap::AtMost(n) => Some(n),
            ResultCap::Unbounded => None,
        }
    }
}

impl Default for ResultCap {
    fn default() -> Self {
        ResultCap::AtMost(DEFAULT_RESULT_CAP)
    }
}

impl From<usize> for ResultCap {
    fn from(n: usize) -> Self {
        if n == 0 {
            ResultCap::Unbounded
        } else {
            ResultCap::AtMost(n)
        }
    }
}

impl From<ResultCap> for usize {
    fn from(cap: ResultCap) -> Self {
        cap.limit().unwrap_or(0)
    }
}
