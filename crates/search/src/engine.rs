//! Keyword search over a [`TagIndex`]
//!
//! Pipeline per query:
//! 1. select the bucket for the keyword's lowercased first character
//! 2. score every candidate in it
//! 3. group by score, highest first, manifest order within a score
//! 4. truncate to the configured [`ResultCap`]
//!
//! Search never fails: an empty or unmatched keyword yields an empty list.

use crate::index::TagIndex;
use crate::scorer::{PrefixScorer, ScoreBuckets, Scorer};
use serde::Serialize;
use stickers_core::{Page, ResultCap, TagEntry};
use tracing::debug;

/// A ranked result with the score it was ranked by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredEntry {
    /// The matching entry
    pub entry: TagEntry,
    /// Score in `1..=max_score`
    pub score: usize,
}

/// Search orchestrator borrowing an immutable index
pub struct SearchEngine<'a, S = PrefixScorer> {
    index: &'a TagIndex,
    scorer: S,
    cap: ResultCap,
}

impl<'a> SearchEngine<'a, PrefixScorer> {
    /// Engine with the prefix scorer and the default cap
    pub fn new(index: &'a TagIndex) -> Self {
        SearchEngine {
            index,
            scorer: PrefixScorer::default(),
            cap: ResultCap::default(),
        }
    }
}

impl<'a, S: Scorer> SearchEngine<'a, S> {
    /// Engine with a custom scorer
    pub fn with_scorer(index: &'a TagIndex, scorer: S) -> Self {
        SearchEngine {
            index,
            scorer,
            cap: ResultCap::default(),
        }
    }

    /// Builder: set the result cap
    pub fn with_cap(mut self, cap: ResultCap) -> Self {
        self.cap = cap;
        self
    }

    /// Configured result cap
    pub fn cap(&self) -> ResultCap {
        self.cap
    }

    /// Ranked entries for `keyword`, best first
    pub fn search(&self, keyword: &str) -> Vec<TagEntry> {
        self.search_scored(keyword)
            .into_iter()
            .map(|s| s.entry)
            .collect()
    }

    /// Ranked entries together with their scores
    pub fn search_scored(&self, keyword: &str) -> Vec<ScoredEntry> {
        let candidates = self.index.bucket_for(keyword);
        let mut buckets = ScoreBuckets::new(self.scorer.max_score());
        for entry in candidates {
            buckets.push(self.scorer.score(keyword, &entry.tag), entry);
        }

        let matched = buckets.len();
        let ranked: Vec<ScoredEntry> = buckets
            .into_ranked()
            .map(|(score, entry)| ScoredEntry {
                entry: entry.clone(),
                score,
            })
            .collect();
        let results = self.cap.apply(ranked);

        debug!(
            target: "stickers::search",
            keyword,
            scorer = self.scorer.name(),
            candidates = candidates.len(),
            matched,
            returned = results.len(),
            "Search completed"
        );
        results
    }

    /// One page of the capped ranking
    pub fn search_page(&self, keyword: &str, page: usize, page_size: usize) -> Page<TagEntry> {
        Page::slice(self.search(keyword), page, page_size)
    }

    /// File ids carrying every whitespace-separated tag in `query`.
    ///
    /// Tags match exactly, case-sensitive. An empty query matches every file.
    /// Results follow manifest order and are not capped.
    pub fn search_all_tags(&self, query: &str) -> Vec<String> {
        let wanted: Vec<&str> = query.split_whitespace().collect();
        self.index
            .files()
            .iter()
            .filter(|file_id| self.index.file_has_all_tags(file_id, &wanted))
            .cloned()
            .collect()
    }
}
