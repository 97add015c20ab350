//! Keyword-to-tag scoring
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - PrefixScorer, the default leading-character match scorer
//! - ScoreBuckets, the per-query grouping of candidates by score

use stickers_core::{TagEntry, MAX_SUPPORTED_TAG_LENGTH};

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scores are small integers in `0..=max_score()`. A score of 0 means "no
/// match" and the candidate is dropped.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so a board can be searched from any thread.
pub trait Scorer: Send + Sync {
    /// Score a tag against a keyword
    fn score(&self, keyword: &str, tag: &str) -> usize;

    /// Highest score this scorer can return; sizes the score buckets
    fn max_score(&self) -> usize;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// PrefixScorer
// ============================================================================

/// Counts matching leading characters, up to a cap
///
/// Comparison is case-sensitive and char-wise. The scan stops at the first
/// mismatch, when either string runs out, or after `max_len` characters, so
/// each call costs O(min(len, max_len)).
///
/// # Example
///
/// ```
/// use stickers_search::scorer::{PrefixScorer, Scorer};
///
/// let scorer = PrefixScorer::default();
/// assert_eq!(scorer.score("do", "dog"), 2);
/// assert_eq!(scorer.score("dig", "dog"), 1);
/// assert_eq!(scorer.score("supercalifragilistic", "supercalifragilistic"), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrefixScorer {
    max_len: usize,
}

impl Default for PrefixScorer {
    fn default() -> Self {
        PrefixScorer {
            max_len: MAX_SUPPORTED_TAG_LENGTH,
        }
    }
}

impl Scorer for PrefixScorer {
    fn score(&self, keyword: &str, tag: &str) -> usize {
        keyword
            .chars()
            .zip(tag.chars())
            .take(self.max_len)
            .take_while(|(k, t)| k == t)
            .count()
    }

    fn max_score(&self) -> usize {
        self.max_len
    }

    fn name(&self) -> &str {
        "prefix"
    }
}

// ============================================================================
// ScoreBuckets
// ============================================================================

/// Candidates grouped by score for one query
///
/// Slot `score - 1` holds the candidates with that score, in insertion
/// order. Score 0 has no slot.
#[derive(Debug)]
pub struct ScoreBuckets<'a> {
    slots: Vec<Vec<&'a TagEntry>>,
}

impl<'a> ScoreBuckets<'a> {
    /// Allocate one slot per non-zero score
    pub fn new(max_score: usize) -> Self {
        ScoreBuckets {
            slots: vec![Vec::new(); max_score],
        }
    }

    /// File a candidate; scores of 0 are ignored, scores above the top slot
    /// are clamped into it
    pub fn push(&mut self, score: usize, entry: &'a TagEntry) {
        if score == 0 || self.slots.is_empty() {
            return;
        }
        let slot = score.min(self.slots.len()) - 1;
        self.slots[slot].push(entry);
    }

    /// Candidates with their scores, best first, stable within a score
    pub fn into_ranked(self) -> impl Iterator<Item = (usize, &'a TagEntry)> {
        self.slots
            .into_iter()
            .enumerate()
            .rev()
            .flat_map(|(slot, entries)| entries.into_iter().map(move |e| (slot + 1, e)))
    }

    /// Number of scored candidates
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// True when no candidate scored above 0
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}
