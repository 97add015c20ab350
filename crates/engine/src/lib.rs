//! Sticker engine coordination
//!
//! This crate sits on top of the search crate:
//! - StickerBoard: swappable index, search, default view, copy flow
//! - RecencyTracker: bounded most-recent-first list over a KeyValueStore
//! - DefaultViewComposer: recency-or-fallback and random-fill policies
//! - ImageSource / Clipboard: collaborators for copy-to-clipboard
//!
//! The board is the only component that knows about:
//! - Rebuild-and-swap of the index
//! - When a selection counts as "used"

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod clipboard;
pub mod default_view;
pub mod recency;
pub mod store;

pub use board::StickerBoard;
pub use clipboard::{
    mime_for, Clipboard, FileClipboard, FsImageSource, ImageSource, MemoryClipboard, StickerImage,
};
pub use default_view::{promote_recent, sample_indices, DefaultViewComposer};
pub use recency::RecencyTracker;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
