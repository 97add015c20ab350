//! Image fetch and clipboard collaborators for the copy flow

use parking_lot::Mutex;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use stickers_core::{Error, Result};

/// Binary image content for one sticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StickerImage {
    /// Sticker the bytes belong to
    pub file_id: String,
    /// MIME type handed to the clipboard
    pub mime_type: String,
    /// Raw image bytes
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Resolves a file id to image bytes
pub trait ImageSource: Send + Sync {
    /// Fetch the image for `file_id`
    fn fetch(&self, file_id: &str) -> Result<StickerImage>;
}

/// Platform clipboard write primitive
pub trait Clipboard: Send + Sync {
    /// Place `image` on the clipboard
    fn write(&self, image: &StickerImage) -> Result<()>;
}

/// MIME type guessed from a file extension; `application/octet-stream` when
/// unknown.
pub fn mime_for(file_id: &str) -> &'static str {
    let ext = Path::new(file_id)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Reads sticker files from a directory
#[derive(Debug, Clone)]
pub struct FsImageSource {
    root: PathBuf,
}

impl FsImageSource {
    /// Serve files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsImageSource { root: root.into() }
    }

    /// Path for `file_id`, refusing anything that would leave `root`
    fn resolve(&self, file_id: &str) -> Result<PathBuf> {
        let relative = Path::new(file_id);
        let contained = !file_id.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("file id '{}' escapes the image directory", file_id),
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl ImageSource for FsImageSource {
    fn fetch(&self, file_id: &str) -> Result<StickerImage> {
        let path = self.resolve(file_id)?;
        let bytes = std::fs::read(&path)?;
        Ok(StickerImage {
            file_id: file_id.to_string(),
            mime_type: mime_for(file_id).to_string(),
            bytes,
        })
    }
}

/// Writes clipboard content to a file
///
/// Stands in for a platform clipboard on hosts without one.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    target: PathBuf,
}

impl FileClipboard {
    /// Write copied images to `target`
    pub fn new(target: impl Into<PathBuf>) -> Self {
        FileClipboard {
            target: target.into(),
        }
    }

    /// Destination path
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl Clipboard for FileClipboard {
    fn write(&self, image: &StickerImage) -> Result<()> {
        std::fs::write(&self.target, &image.bytes)?;
        Ok(())
    }
}

/// Keeps the last written image in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<StickerImage>>,
}

impl MemoryClipboard {
    /// Empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content
    pub fn content(&self) -> Option<StickerImage> {
        self.content.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&self, image: &StickerImage) -> Result<()> {
        *self.content.lock() = Some(image.clone());
        Ok(())
    }
}
