//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread::{self, JoinHandle};

pub use stickers::{
    parse_manifest, DefaultViewConfig, Error, ManifestLoader, MemoryStore, ResultCap, Selection,
    StaticManifestSource, StickerBoard, StickersConfig, TagEntry, TagIndex, CONFIG_FILE_NAME,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

// ============================================================================
// Manifests
// ============================================================================

/// Two dogs sharing a tag
pub const DOGS: &str = "dog1,happy,dog\ndog2,sad,dog";

/// A slightly larger manifest with quoting, capitals and shared tags
pub const ZOO: &str = "\
dog1.png,happy,dog,doggo
dog2.png,sad,dog
cat1.png,\"cat , cute, Cool\"
cat2.png,cat,angry
corgi.png,Corgi,dog,cute
apple.png,apple,red
";

/// Synthetic manifest of `files` stickers with `tags_per_file` tags each
pub fn synthetic_manifest(files: usize, tags_per_file: usize) -> String {
    let words = [
        "happy", "sad", "dog", "doggo", "cat", "cute", "cool", "angry", "apple", "party",
    ];
    let mut out = String::new();
    for i in 0..files {
        out.push_str(&format!("s{}.png", i));
        for j in 0..tags_per_file {
            out.push(',');
            out.push_str(words[(i * 7 + j * 3) % words.len()]);
        }
        out.push('\n');
    }
    out
}

// ============================================================================
// Boards
// ============================================================================

/// In-memory board with `manifest` installed and a fixed RNG seed
pub fn board_with(manifest: &str) -> StickerBoard<MemoryStore> {
    board_with_config(&StickersConfig::default(), manifest)
}

/// In-memory board for `config` with `manifest` installed
pub fn board_with_config(config: &StickersConfig, manifest: &str) -> StickerBoard<MemoryStore> {
    let board = StickerBoard::new(config, MemoryStore::new())
        .expect("valid config")
        .with_rng(StdRng::seed_from_u64(0x5EED));
    let loader = ManifestLoader::new(StaticManifestSource::new().with("m.csv", manifest));
    board.reindex(&loader, &["m.csv"]).expect("manifest loads");
    board
}

/// Config selecting the random-fill default view
pub fn random_fill_config(sample_size: usize) -> StickersConfig {
    StickersConfig {
        default_view: DefaultViewConfig {
            policy: "recency_plus_random_fill".to_string(),
            sample_size,
            ..DefaultViewConfig::default()
        },
        ..StickersConfig::default()
    }
}

/// File ids of a result list
pub fn file_ids(entries: &[TagEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.file_id.as_str()).collect()
}

// ============================================================================
// On-disk fixture
// ============================================================================

/// A data directory with a manifest, image files and a config file
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Data dir holding `manifest` as `stickers.csv` and the default config
    pub fn new(manifest: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("stickers.csv"), manifest).expect("write manifest");
        StickersConfig::write_default_if_missing(&dir.path().join(CONFIG_FILE_NAME))
            .expect("write config");
        Fixture { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(CONFIG_FILE_NAME)
    }

    /// Config read back from disk with `data_dir` pointing at the fixture
    pub fn config(&self) -> StickersConfig {
        let mut config = StickersConfig::from_file(&self.config_path()).expect("read config");
        config.data_dir = self.dir.path().to_path_buf();
        config
    }

    /// Write an image file for `file_id`
    pub fn add_image(&self, file_id: &str, bytes: &[u8]) {
        std::fs::write(self.dir.path().join(file_id), bytes).expect("write image");
    }

    /// Write an arbitrary file under the data dir
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("write file");
    }
}

// ============================================================================
// Concurrency
// ============================================================================

/// Run `f(thread_index)` on `threads` threads released together by a barrier
pub fn run_concurrent<F, T>(threads: usize, f: F) -> Vec<T>
where
    F: Fn(usize) -> T + Send + Sync + 'static,
    T: Send + 'static,
{
    let barrier = Arc::new(Barrier::new(threads));
    let f = Arc::new(f);
    let handles: Vec<JoinHandle<T>> = (0..threads)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let f = Arc::clone(&f);
            thread::spawn(move || {
                barrier.wait();
                f(i)
            })
        })
        .collect();
    handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect()
}
