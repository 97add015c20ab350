//! Stickers - keyword search, ranking and recency for tagged sticker collections
//!
//! A user types a short keyword; every `(tag, file)` pair whose tag shares the
//! keyword's first letter is scored by leading-character agreement, ranked and
//! capped. An empty keyword shows recently used stickers instead.
//!
//! # Quick Start
//!
//! ```
//! use stickers::{parse_manifest, MemoryStore, StickerBoard, StickersConfig, TagIndex};
//!
//! let board = StickerBoard::new(&StickersConfig::default(), MemoryStore::new())?;
//! board.install(TagIndex::build(&parse_manifest("dog1.png,happy,dog\ndog2.png,sad,dog")));
//!
//! let results = board.search("do");
//! assert_eq!(results[0].file_id, "dog1.png");
//!
//! board.record_use(results[1].clone())?;
//! assert_eq!(board.search("")[0].file_id, "dog2.png");
//! # Ok::<(), stickers::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `stickers-core`: types, limits, errors and configuration
//! - `stickers-search`: manifest loading, the tag index, scoring and debounce
//! - `stickers-engine`: recency, default view and the `StickerBoard`

pub use stickers_core::*;
pub use stickers_engine::*;
pub use stickers_search::*;
