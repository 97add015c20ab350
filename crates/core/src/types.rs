//! Core types for the sticker engine
//!
//! This module defines the foundational types:
//! - TagEntry: one `(tag, file_id)` pair as indexed and ranked
//! - Selection: a recency identity (tagged pair or bare sticker id)
//! - Page: an in-memory page over a ranked result list
//! - bucket_key: first-character bucketing rule shared by index and search

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Bucket key for a tag or keyword: its lowercased first character.
///
/// An empty string maps to the empty key `""`, so every tag has exactly one
/// bucket.
///
/// # Example
///
/// ```
/// use stickers_core::bucket_key;
///
/// assert_eq!(bucket_key("Dog"), "d");
/// assert_eq!(bucket_key(""), "");
/// ```
pub fn bucket_key(text: &str) -> String {
    text.chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

/// A single `(tag, file_id)` pair.
///
/// A sticker with several tags produces several entries, and a tag shared by
/// several stickers appears once per sticker. Entries are immutable once
/// indexed.
///
/// Serialized as a two-element array `[tag, file_id]`, which is the persisted
/// recency format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TagEntry {
    /// Tag text, case preserved
    pub tag: String,
    /// Sticker file identifier
    pub file_id: String,
}

impl TagEntry {
    /// Create a new entry
    pub fn new(tag: impl Into<String>, file_id: impl Into<String>) -> Self {
        TagEntry {
            tag: tag.into(),
            file_id: file_id.into(),
        }
    }

    /// Bucket this entry belongs to
    pub fn bucket_key(&self) -> String {
        bucket_key(&self.tag)
    }
}

impl From<(String, String)> for TagEntry {
    fn from((tag, file_id): (String, String)) -> Self {
        TagEntry { tag, file_id }
    }
}

impl From<TagEntry> for (String, String) {
    fn from(entry: TagEntry) -> Self {
        (entry.tag, entry.file_id)
    }
}

impl fmt::Display for TagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.tag, self.file_id)
    }
}

/// An item reported back by the caller as "used".
///
/// The manifest-driven deployment remembers the `(tag, file)` pair that was
/// clicked; the id-driven deployment only remembers the sticker id. Both are
/// deduplicated by file id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    /// Pair as rendered, `["tag", "file"]` on the wire
    Tagged(TagEntry),
    /// Bare sticker id, `"file"` on the wire. Numeric ids (`12`) are read
    /// as their decimal text and written back as strings.
    Id(#[serde(deserialize_with = "id_from_text_or_number")] String),
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}

impl Selection {
    /// Identity key used for deduplication
    pub fn file_id(&self) -> &str {
        match self {
            Selection::Tagged(entry) => &entry.file_id,
            Selection::Id(id) => id,
        }
    }

    /// Tag, if this selection carries one
    pub fn tag(&self) -> Option<&str> {
        match self {
            Selection::Tagged(entry) => Some(&entry.tag),
            Selection::Id(_) => None,
        }
    }
}

impl From<TagEntry> for Selection {
    fn from(entry: TagEntry) -> Self {
        Selection::Tagged(entry)
    }
}

impl From<&str> for Selection {
    fn from(id: &str) -> Self {
        Selection::Id(id.to_string())
    }
}

/// One page of an in-memory result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total items across all pages
    pub total: usize,
    /// 1-based page number
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// `ceil(total / page_size)`
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut page `page` (1-based) of `page_size` items out of `all`.
    ///
    /// Page 0 is treated as page 1 and a zero page size as 1. Pages past the
    /// end are empty but still report the correct totals.
    pub fn slice(all: Vec<T>, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total = all.len();
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size);
        let items = all.into_iter().skip(start).take(page_size).collect();
        Page {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}
