//! ArgMatches → CliAction conversion.

use std::path::PathBuf;

use clap::ArgMatches;
use stickers_core::{Selection, TagEntry};

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Ranked search, or the default view for an empty keyword.
    Search {
        keyword: String,
        page: usize,
        page_size: usize,
    },
    /// Every distinct tag.
    Tags,
    /// The default view.
    Default,
    /// Stickers carrying all `tags`.
    Filter {
        tags: Vec<String>,
        page: usize,
        page_size: usize,
    },
    /// Copy a sticker's image to `out`.
    Copy { selection: Selection, out: PathBuf },
    /// Recently used stickers.
    Recent { limit: Option<usize> },
    /// Write the default config file.
    Init,
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "search" => {
            let (page, page_size) = page_of(sub_matches);
            Ok(CliAction::Search {
                keyword: string_arg(sub_matches, "keyword").unwrap_or_default(),
                page,
                page_size,
            })
        }
        "tags" => Ok(CliAction::Tags),
        "default" => Ok(CliAction::Default),
        "filter" => {
            let (page, page_size) = page_of(sub_matches);
            let tags = sub_matches
                .get_many::<String>("tags")
                .map(|v| v.cloned().collect())
                .unwrap_or_default();
            Ok(CliAction::Filter {
                tags,
                page,
                page_size,
            })
        }
        "copy" => {
            let file_id = string_arg(sub_matches, "file-id")
                .ok_or_else(|| "copy: FILE_ID is required".to_string())?;
            let out = string_arg(sub_matches, "out")
                .ok_or_else(|| "copy: --out is required".to_string())?;
            let selection = match string_arg(sub_matches, "tag") {
                Some(tag) => Selection::Tagged(TagEntry::new(tag, file_id)),
                None => Selection::Id(file_id),
            };
            Ok(CliAction::Copy {
                selection,
                out: PathBuf::from(out),
            })
        }
        "recent" => Ok(CliAction::Recent {
            limit: sub_matches.get_one::<usize>("limit").copied(),
        }),
        "init" => Ok(CliAction::Init),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn string_arg(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

fn page_of(matches: &ArgMatches) -> (usize, usize) {
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);
    let page_size = matches.get_one::<usize>("page-size").copied().unwrap_or(20);
    (page, page_size)
}
