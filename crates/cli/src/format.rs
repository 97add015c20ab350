//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): numbered lines, e.g. `1) dog -> dog1.png`, `(empty list)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare values, one per line

use stickers_core::{Error, Page, Selection, TagEntry};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

// =========================================================================
// JSON
// =========================================================================

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
}

// =========================================================================
// Raw
// =========================================================================

fn format_raw(output: &Output) -> String {
    match output {
        Output::Entries(page) => lines(page.items.iter().map(|e| e.file_id.as_str())),
        Output::View(entries) => lines(entries.iter().map(|e| e.file_id.as_str())),
        Output::Tags(tags) => lines(tags.iter().map(String::as_str)),
        Output::Files(page) => lines(page.items.iter().map(String::as_str)),
        Output::Copied { out, .. } => out.display().to_string(),
        Output::Recent(list) => lines(list.iter().map(Selection::file_id)),
        Output::ConfigWritten { path, .. } => path.display().to_string(),
    }
}

fn lines<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join("\n")
}

// =========================================================================
// Human
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Entries(page) => {
            let body = numbered(page.items.iter().map(format_entry), offset(page));
            format!("{}\n{}", body, page_footer(page, "result"))
        }
        Output::View(entries) => numbered(entries.iter().map(format_entry), 0),
        Output::Tags(tags) => numbered(tags.iter().map(|t| format!("\"{}\"", t)), 0),
        Output::Files(page) => {
            let body = numbered(page.items.iter().cloned(), offset(page));
            format!("{}\n{}", body, page_footer(page, "sticker"))
        }
        Output::Copied { image, out } => format!(
            "OK ({} {}, {} bytes -> {})",
            image.file_id,
            image.mime_type,
            image.bytes.len(),
            out.display()
        ),
        Output::Recent(list) => numbered(list.iter().map(format_selection), 0),
        Output::ConfigWritten { path, created } => {
            if *created {
                format!("Wrote default config to {}", path.display())
            } else {
                format!("Config already exists at {}", path.display())
            }
        }
    }
}

fn format_entry(entry: &TagEntry) -> String {
    if entry.tag.is_empty() {
        entry.file_id.clone()
    } else {
        entry.to_string()
    }
}

fn format_selection(selection: &Selection) -> String {
    match selection {
        Selection::Tagged(entry) => format_entry(entry),
        Selection::Id(id) => id.clone(),
    }
}

fn offset<T>(page: &Page<T>) -> usize {
    page.page.saturating_sub(1).saturating_mul(page.page_size)
}

fn numbered(items: impl Iterator<Item = String>, start: usize) -> String {
    let rows: Vec<String> = items
        .enumerate()
        .map(|(i, item)| format!("{}) {}", start + i + 1, item))
        .collect();
    if rows.is_empty() {
        "(empty list)".to_string()
    } else {
        rows.join("\n")
    }
}

fn page_footer<T>(page: &Page<T>, noun: &str) -> String {
    let plural = if page.total == 1 { "" } else { "s" };
    format!(
        "(page {}/{}, {} {}{})",
        page.page,
        page.total_pages.max(1),
        page.total,
        noun,
        plural
    )
}
