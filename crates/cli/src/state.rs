//! Board wrapper holding the loaded configuration.
//!
//! Resolves the config file, opens the `StickerBoard` it describes and runs
//! parsed actions against it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use stickers_core::{Page, Result, Selection, StickersConfig, TagEntry, CONFIG_FILE_NAME};
use stickers_engine::{FileClipboard, FsImageSource, JsonFileStore, StickerBoard, StickerImage};

use crate::parse::CliAction;

/// Result of one executed action.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Output {
    /// One page of ranked `(tag, file)` entries.
    Entries(Page<TagEntry>),
    /// Unpaged entries (default view).
    View(Vec<TagEntry>),
    /// Distinct tags.
    Tags(Vec<String>),
    /// One page of file ids.
    Files(Page<String>),
    /// An image copied to a file.
    Copied { image: StickerImage, out: PathBuf },
    /// Recently used selections.
    Recent(Vec<Selection>),
    /// Config file location after `init`.
    ConfigWritten { path: PathBuf, created: bool },
}

/// Where the config file lives: `--config`, else `./stickers.toml`.
pub fn config_path(flag: Option<&str>) -> PathBuf {
    flag.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Load the config at `path`, or defaults if it does not exist.
///
/// A relative `data_dir` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<StickersConfig> {
    let mut config = if path.exists() {
        StickersConfig::from_file(path)?
    } else {
        StickersConfig::default()
    };
    if config.data_dir.is_relative() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.data_dir = parent.join(&config.data_dir);
        }
    }
    Ok(config)
}

/// Wraps the board and the config it was opened from.
pub struct SessionState {
    board: StickerBoard<JsonFileStore>,
    config: StickersConfig,
    config_path: PathBuf,
}

impl SessionState {
    /// Open the board described by the config at `config_path`.
    pub fn open(config_path: PathBuf) -> Result<Self> {
        let config = load_config(&config_path)?;
        let board = StickerBoard::open(&config)?;
        Ok(Self {
            board,
            config,
            config_path,
        })
    }

    /// Execute a parsed action.
    pub fn execute(&self, action: CliAction) -> Result<Output> {
        match action {
            CliAction::Search {
                keyword,
                page,
                page_size,
            } => Ok(Output::Entries(
                self.board.search_page(&keyword, page, page_size),
            )),
            CliAction::Tags => Ok(Output::Tags(self.board.all_tags())),
            CliAction::Default => Ok(Output::View(self.board.default_view())),
            CliAction::Filter {
                tags,
                page,
                page_size,
            } => Ok(Output::Files(
                self.board.browse(&tags.join(" "), page, page_size),
            )),
            CliAction::Copy { selection, out } => {
                let images = FsImageSource::new(self.config.data_dir.clone());
                let clipboard = FileClipboard::new(&out);
                let image = self.board.copy(selection, &images, &clipboard)?;
                Ok(Output::Copied { image, out })
            }
            CliAction::Recent { limit } => Ok(Output::Recent(self.board.recent(limit))),
            CliAction::Init => init_config(&self.config_path),
        }
    }
}

/// Write the default config to `path` unless it already exists.
pub fn init_config(path: &Path) -> Result<Output> {
    let created = !path.exists();
    StickersConfig::write_default_if_missing(path)?;
    Ok(Output::ConfigWritten {
        path: path.to_path_buf(),
        created,
    })
}
