//! First-character tag index
//!
//! This module provides:
//! - TagIndex: bucket key -> `(tag, file_id)` entries in manifest order
//! - `all_tags`: distinct tags, bucket-key order then first-seen order
//! - the distinct file list and each file's tags, for default-view sampling
//!   and conjunctive tag filtering
//!
//! # Lifecycle
//!
//! An index is built wholesale from parsed manifest records and never mutated
//! afterwards. Reindexing builds a fresh `TagIndex` and swaps it in; see the
//! engine crate's `StickerBoard`.

use crate::manifest::ManifestRecord;
use std::collections::{BTreeMap, HashMap, HashSet};
use stickers_core::{bucket_key, TagEntry};

/// Immutable first-character index over manifest tags
///
/// # Invariants
///
/// - every entry sits in exactly one bucket, keyed by `bucket_key(tag)`
/// - bucket contents keep manifest insertion order
/// - `all_tags` holds each distinct tag once
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    /// Bucket key -> entries; BTreeMap keeps keys sorted
    buckets: BTreeMap<String, Vec<TagEntry>>,

    /// Distinct tags in bucket-key order, first-seen within a bucket
    all_tags: Vec<String>,

    /// Distinct file ids in first-seen manifest order
    files: Vec<String>,

    /// File id -> first entry seen for it
    primary: HashMap<String, TagEntry>,

    /// File id -> every tag attached to it
    file_tags: HashMap<String, HashSet<String>>,

    /// Total entries across all buckets
    entry_count: usize,
}

impl TagIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from manifest records.
    ///
    /// Every tag of every record is appended to its bucket. A record whose
    /// file id was already seen contributes its tags again; the file itself is
    /// listed once.
    pub fn build(records: &[ManifestRecord]) -> Self {
        let mut index = TagIndex::new();

        for record in records {
            if !index.file_tags.contains_key(&record.file_id) {
                index.files.push(record.file_id.clone());
                index.file_tags.insert(record.file_id.clone(), HashSet::new());
            }

            for tag in &record.tags {
                let entry = TagEntry::new(tag.as_str(), record.file_id.as_str());
                index
                    .primary
                    .entry(record.file_id.clone())
                    .or_insert_with(|| entry.clone());
                if let Some(tags) = index.file_tags.get_mut(&record.file_id) {
                    tags.insert(tag.clone());
                }
                index
                    .buckets
                    .entry(entry.bucket_key())
                    .or_default()
                    .push(entry);
                index.entry_count += 1;
            }
        }

        index.all_tags = Self::collect_all_tags(&index.buckets);
        index
    }

    /// Replace the whole index with one built from `records`
    pub fn rebuild(&mut self, records: &[ManifestRecord]) {
        *self = Self::build(records);
    }

    fn collect_all_tags(buckets: &BTreeMap<String, Vec<TagEntry>>) -> Vec<String> {
        let mut all_tags = Vec::new();
        for entries in buckets.values() {
            let mut seen: HashSet<&str> = HashSet::new();
            for entry in entries {
                if seen.insert(entry.tag.as_str()) {
                    all_tags.push(entry.tag.clone());
                }
            }
        }
        all_tags
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Entries in the bucket with this exact key; empty if absent
    pub fn bucket(&self, key: &str) -> &[TagEntry] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidate bucket for a keyword.
    ///
    /// An empty keyword has no candidates, even if tags with an empty bucket
    /// key were indexed.
    pub fn bucket_for(&self, keyword: &str) -> &[TagEntry] {
        if keyword.is_empty() {
            return &[];
        }
        self.bucket(&bucket_key(keyword))
    }

    /// Bucket keys in ascending order
    pub fn bucket_keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Distinct tags in display order
    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }

    /// Distinct file ids in manifest order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// First entry indexed for a file
    pub fn primary_entry(&self, file_id: &str) -> Option<&TagEntry> {
        self.primary.get(file_id)
    }

    /// Whether `file_id` carries every tag in `tags` (exact match)
    pub fn file_has_all_tags(&self, file_id: &str, tags: &[&str]) -> bool {
        match self.file_tags.get(file_id) {
            Some(own) => tags.iter().all(|t| own.contains(*t)),
            None => false,
        }
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Total `(tag, file)` entries
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Distinct files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of non-empty buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// True when nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
