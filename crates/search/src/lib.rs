//! Tag search for sticker collections
//!
//! This crate provides:
//! - Manifest parsing and loading (single manifest or a manifest list)
//! - TagIndex: first-character buckets over `(tag, file)` entries
//! - Scorer trait and the default PrefixScorer
//! - SearchEngine: bucket selection, scoring, ranking and truncation
//! - SearchScheduler: debounce state machine for keystroke-driven search
//!
//! # Usage
//!
//! ```
//! use stickers_search::{parse_manifest, SearchEngine, TagIndex};
//!
//! let index = TagIndex::build(&parse_manifest("dog1,happy,dog\ndog2,sad,dog"));
//! let results = SearchEngine::new(&index).search("do");
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].file_id, "dog1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod index;
pub mod manifest;
pub mod scheduler;
pub mod scorer;

// Re-export commonly used types
pub use engine::{ScoredEntry, SearchEngine};
pub use index::TagIndex;
pub use manifest::{
    parse_manifest, parse_manifest_list, FsManifestSource, ManifestLoader, ManifestRecord,
    ManifestSource, StaticManifestSource,
};
pub use scheduler::{SchedulerState, SearchScheduler};
pub use scorer::{PrefixScorer, ScoreBuckets, Scorer};
