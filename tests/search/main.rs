//! Sticker search integration tests
//!
//! End-to-end behaviour through the `stickers` facade: indexing, ranking,
//! recency, default view, the copy flow and reindexing under concurrency.

#[path = "../common/mod.rs"]
mod common;

mod board_lifecycle;
mod concurrency;
mod copy_flow;
mod debounce;
mod default_view;
mod recency;
