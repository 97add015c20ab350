//! StickerBoard: owns the live index and the recency list
//!
//! The board is the single entry point a front end talks to:
//!
//! - `reindex` loads manifests, builds a complete new index and swaps it in
//! - `search` ranks a keyword, or composes the default view for `""`
//! - `copy` fetches image bytes, writes them to a clipboard and, only if both
//!   succeed, records the sticker as recently used
//!
//! ## Concurrency
//!
//! The index sits behind `RwLock<Arc<TagIndex>>`. Readers clone the `Arc` and
//! release the lock immediately; a reindex holds the write lock only for the
//! pointer swap. A query therefore sees either the old or the new index, never
//! a mix.

use crate::clipboard::{Clipboard, ImageSource, StickerImage};
use crate::default_view::{promote_recent, DefaultViewComposer};
use crate::recency::RecencyTracker;
use crate::store::{JsonFileStore, KeyValueStore};
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use stickers_core::{Error, Page, Result, ResultCap, Selection, StickersConfig, TagEntry};
use stickers_search::{
    FsManifestSource, ManifestLoader, ManifestRecord, ManifestSource, SearchEngine,
    SearchScheduler, TagIndex,
};
use tracing::{debug, error, info};

/// Coordinator over the swappable index, recency tracker and default view
pub struct StickerBoard<S> {
    index: RwLock<Arc<TagIndex>>,
    tracker: RecencyTracker<S>,
    composer: DefaultViewComposer,
    cap: ResultCap,
    debounce: Duration,
    distinct_until_changed: bool,
    rng: Mutex<StdRng>,
}

impl StickerBoard<JsonFileStore> {
    /// Open a board from configuration.
    ///
    /// Recency is persisted under `data_dir`, and the manifest (or manifest
    /// list) named by the config is loaded before returning.
    ///
    /// # Errors
    ///
    /// Invalid configuration or a manifest that cannot be loaded.
    pub fn open(config: &StickersConfig) -> Result<Self> {
        let store = JsonFileStore::new(config.data_dir.clone());
        let board = StickerBoard::new(config, store)?;
        board.reindex_from_config(config)?;
        Ok(board)
    }
}

impl<S: KeyValueStore> StickerBoard<S> {
    /// Create a board with an empty index
    pub fn new(config: &StickersConfig, store: S) -> Result<Self> {
        config.validate()?;
        let policy = config.default_view_policy()?;
        Ok(StickerBoard {
            index: RwLock::new(Arc::new(TagIndex::new())),
            tracker: RecencyTracker::new(store, config.recent_key.clone(), config.recent_capacity),
            composer: DefaultViewComposer::new(policy),
            cap: config.result_cap,
            debounce: config.debounce(),
            distinct_until_changed: config.distinct_until_changed,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Builder: replace the sampling RNG (seed it for reproducible views)
    pub fn with_rng(self, rng: StdRng) -> Self {
        *self.rng.lock() = rng;
        self
    }

    // ========================================================================
    // Index lifecycle
    // ========================================================================

    /// Snapshot of the current index
    pub fn index(&self) -> Arc<TagIndex> {
        Arc::clone(&self.index.read())
    }

    /// Swap in an already built index; returns its entry count
    pub fn install(&self, index: TagIndex) -> usize {
        let entries = index.entry_count();
        let files = index.file_count();
        *self.index.write() = Arc::new(index);
        info!(target: "stickers::index", entries, files, "Index rebuilt");
        entries
    }

    /// Load `locations` in order and replace the index.
    ///
    /// On failure the previous index stays live.
    pub fn reindex<M, L>(&self, loader: &ManifestLoader<M>, locations: &[L]) -> Result<usize>
    where
        M: ManifestSource,
        L: AsRef<str>,
    {
        let records = loader.load_all(locations);
        self.install_records(records)
    }

    /// Load every manifest named in a list file and replace the index
    pub fn reindex_list<M: ManifestSource>(
        &self,
        loader: &ManifestLoader<M>,
        list_location: &str,
    ) -> Result<usize> {
        let records = loader.load_list(list_location);
        self.install_records(records)
    }

    /// Reindex from the manifest (or manifest list) named by `config`,
    /// resolved under its `data_dir`
    pub fn reindex_from_config(&self, config: &StickersConfig) -> Result<usize> {
        let loader = ManifestLoader::new(FsManifestSource::new(config.data_dir.clone()));
        match &config.manifest_list {
            Some(list) => self.reindex_list(&loader, list),
            None => self.reindex(&loader, &[config.manifest.as_str()]),
        }
    }

    fn install_records(&self, records: Result<Vec<ManifestRecord>>) -> Result<usize> {
        match records {
            Ok(records) => Ok(self.install(TagIndex::build(&records))),
            Err(e) => {
                error!(target: "stickers::index", error = %e, "Reindex failed, keeping previous index");
                Err(e)
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ranked matches for `keyword`; the default view when it is empty
    pub fn search(&self, keyword: &str) -> Vec<TagEntry> {
        if keyword.is_empty() {
            return self.default_view();
        }
        let index = self.index();
        SearchEngine::new(&index).with_cap(self.cap).search(keyword)
    }

    /// One page of [`search`](Self::search)
    pub fn search_page(&self, keyword: &str, page: usize, page_size: usize) -> Page<TagEntry> {
        Page::slice(self.search(keyword), page, page_size)
    }

    /// Result list for an empty keyword
    pub fn default_view(&self) -> Vec<TagEntry> {
        let index = self.index();
        let recent = self.tracker.recent_list(None);
        let mut rng = self.rng.lock();
        self.composer.compose(&index, &recent, &mut *rng)
    }

    /// Distinct tags in display order
    pub fn all_tags(&self) -> Vec<String> {
        self.index().all_tags().to_vec()
    }

    /// File ids carrying every tag in `query`, paged.
    ///
    /// With an empty query all files are listed and recently used ones come
    /// first.
    pub fn browse(&self, query: &str, page: usize, page_size: usize) -> Page<String> {
        let index = self.index();
        let mut files = SearchEngine::new(&index).search_all_tags(query);
        if query.trim().is_empty() {
            let recent = self.tracker.recent_ids(None);
            let recent: Vec<&str> = recent.iter().map(String::as_str).collect();
            files = promote_recent(files, &recent, |f| f.as_str());
        }
        Page::slice(files, page, page_size)
    }

    /// Debounce state machine configured from this board's settings
    pub fn scheduler(&self) -> SearchScheduler {
        SearchScheduler::new(self.debounce).distinct_until_changed(self.distinct_until_changed)
    }

    /// Active result cap
    pub fn cap(&self) -> ResultCap {
        self.cap
    }

    // ========================================================================
    // Copy and recency
    // ========================================================================

    /// Copy a sticker to `clipboard`.
    ///
    /// Use is recorded only after both the fetch and the write succeed. A
    /// failure in either is returned as [`Error::CopyFailure`] and leaves the
    /// recency list untouched. A recency write failure after a successful
    /// copy is returned as-is.
    pub fn copy<I, C>(
        &self,
        selection: impl Into<Selection>,
        images: &I,
        clipboard: &C,
    ) -> Result<StickerImage>
    where
        I: ImageSource + ?Sized,
        C: Clipboard + ?Sized,
    {
        let selection = selection.into();
        let file_id = selection.file_id().to_string();

        let image = images
            .fetch(&file_id)
            .and_then(|image| clipboard.write(&image).map(|_| image))
            .map_err(|e| {
                error!(target: "stickers::copy", file_id = %file_id, error = %e, "Copy failed");
                match e {
                    Error::CopyFailure { .. } => e,
                    other => Error::copy_failure(file_id.as_str(), other),
                }
            })?;

        self.tracker.record_use(selection)?;
        info!(target: "stickers::copy", file_id = %file_id, bytes = image.bytes.len(), "Sticker copied");
        Ok(image)
    }

    /// Record a use without copying
    pub fn record_use(&self, selection: impl Into<Selection>) -> Result<()> {
        let selection = selection.into();
        debug!(target: "stickers::recency", file_id = selection.file_id(), "Use reported");
        self.tracker.record_use(selection)
    }

    /// Most recent selections
    pub fn recent(&self, limit: Option<usize>) -> Vec<Selection> {
        self.tracker.recent_list(limit)
    }

    /// The recency tracker
    pub fn tracker(&self) -> &RecencyTracker<S> {
        &self.tracker
    }
}
