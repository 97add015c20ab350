//! Manifest loading
//!
//! A manifest is newline-separated `fileId,tag1,tag2,...` records. The first
//! comma separates the file id from the tag list; quotes are dropped and
//! whitespace around the remaining commas is stripped before splitting.
//!
//! A manifest list is a plain file naming one manifest path per line. Its
//! manifests are loaded in listed order and concatenated.

use std::path::{Component, Path, PathBuf};
use stickers_core::{Error, Result};
use tracing::{debug, warn};

// ============================================================================
// ManifestRecord
// ============================================================================

/// One parsed manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Sticker file identifier
    pub file_id: String,
    /// Tags in manifest order; may contain empty strings
    pub tags: Vec<String>,
}

impl ManifestRecord {
    /// Create a new record
    pub fn new<I, T>(file_id: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        ManifestRecord {
            file_id: file_id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse manifest text into records.
///
/// Lines without a comma or with an empty file id are skipped.
///
/// # Example
///
/// ```
/// use stickers_search::manifest::parse_manifest;
///
/// let records = parse_manifest("dog1,happy , dog\n\ndog2,\"sad,dog\"");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].tags, vec!["happy", "dog"]);
/// assert_eq!(records[1].tags, vec!["sad", "dog"]);
/// ```
pub fn parse_manifest(text: &str) -> Vec<ManifestRecord> {
    text.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ManifestRecord> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (file_id, tag_text) = line.split_once(',')?;
    if file_id.is_empty() {
        return None;
    }
    Some(ManifestRecord {
        file_id: file_id.to_string(),
        tags: split_tags(tag_text),
    })
}

/// Split a tag list, trimming only whitespace that touches a comma.
fn split_tags(text: &str) -> Vec<String> {
    let unquoted: String = text.chars().filter(|&c| c != '"').collect();
    let pieces: Vec<&str> = unquoted.split(',').collect();
    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let mut tag = *piece;
            if i > 0 {
                tag = tag.trim_start();
            }
            if i < last {
                tag = tag.trim_end();
            }
            tag.to_string()
        })
        .collect()
}

/// Parse a manifest list: one path per line, blank lines ignored.
pub fn parse_manifest_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// Sources
// ============================================================================

/// Where manifest text comes from.
///
/// Implementations report any fetch problem as [`Error::LoadFailure`].
pub trait ManifestSource {
    /// Fetch the raw text at `location`
    fn fetch(&self, location: &str) -> Result<String>;
}

/// Reads manifests from files under a root directory
#[derive(Debug, Clone)]
pub struct FsManifestSource {
    root: PathBuf,
}

impl FsManifestSource {
    /// Resolve locations relative to `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsManifestSource { root: root.into() }
    }
}

impl ManifestSource for FsManifestSource {
    fn fetch(&self, location: &str) -> Result<String> {
        let relative = Path::new(location);
        let contained = !location.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(Error::load_failure(
                location,
                "location escapes the manifest directory",
            ));
        }
        std::fs::read_to_string(self.root.join(relative))
            .map_err(|e| Error::load_failure(location, e))
    }
}

/// In-memory manifests keyed by location, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticManifestSource {
    manifests: Vec<(String, String)>,
}

impl StaticManifestSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register text under a location
    pub fn with(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.manifests.push((location.into(), text.into()));
        self
    }
}

impl ManifestSource for StaticManifestSource {
    fn fetch(&self, location: &str) -> Result<String> {
        self.manifests
            .iter()
            .find(|(loc, _)| loc == location)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| Error::load_failure(location, "not found"))
    }
}

// ============================================================================
// ManifestLoader
// ============================================================================

/// Fetches and parses manifests through a [`ManifestSource`]
pub struct ManifestLoader<S> {
    source: S,
}

impl<S: ManifestSource> ManifestLoader<S> {
    /// Create a loader over `source`
    pub fn new(source: S) -> Self {
        ManifestLoader { source }
    }

    /// Load a single manifest
    pub fn load(&self, location: &str) -> Result<Vec<ManifestRecord>> {
        let text = self.source.fetch(location)?;
        let records = parse_manifest(&text);
        if records.is_empty() && !text.trim().is_empty() {
            warn!(target: "stickers::manifest", location, "Manifest has no valid records");
        }
        debug!(target: "stickers::manifest", location, records = records.len(), "Manifest parsed");
        Ok(records)
    }

    /// Load several manifests and concatenate them in the given order.
    ///
    /// Fails on the first manifest that cannot be fetched; nothing partial is
    /// returned.
    pub fn load_all<L: AsRef<str>>(&self, locations: &[L]) -> Result<Vec<ManifestRecord>> {
        let mut records = Vec::new();
        for location in locations {
            records.extend(self.load(location.as_ref())?);
        }
        Ok(records)
    }

    /// Load every manifest named in the list file at `list_location`
    pub fn load_list(&self, list_location: &str) -> Result<Vec<ManifestRecord>> {
        let text = self.source.fetch(list_location)?;
        let locations = parse_manifest_list(&text);
        debug!(target: "stickers::manifest", list_location, manifests = locations.len(), "Manifest list parsed");
        self.load_all(&locations)
    }

    /// Access the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }
}
