//! Core types for the sticker engine
//!
//! This crate defines the foundational types used throughout the system:
//! - TagEntry: `(tag, file_id)` pair, the unit of indexing and ranking
//! - Selection: recency identity (tagged pair or bare id)
//! - Page: in-memory pagination over ranked results
//! - Error: Error type hierarchy
//! - Limits: MAX_SUPPORTED_TAG_LENGTH, ResultCap and defaults
//! - Config: `stickers.toml` loading and validation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod types;

pub use config::{
    DefaultViewConfig, DefaultViewPolicy, StickersConfig, CONFIG_FILE_NAME, RECENT_IDS_KEY,
    RECENT_PAIRS_KEY,
};
pub use error::{Error, Result};
pub use limits::{
    ResultCap, DEFAULT_DEBOUNCE_MS, DEFAULT_RECENT_CAPACITY, DEFAULT_RESULT_CAP,
    DEFAULT_SAMPLE_SIZE, MAX_SUPPORTED_TAG_LENGTH,
};
pub use types::{bucket_key, Page, Selection, TagEntry};
