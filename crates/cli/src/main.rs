//! Stickers CLI: search tagged sticker collections from the shell.
//!
//! `stickers [--config PATH] [--json|--raw] COMMAND`. One command per
//! invocation; the recency list persists between runs under `data_dir`.
//!
//! Logging goes to stderr and is controlled by `STICKERS_LOG`
//! (e.g. `STICKERS_LOG=stickers=debug`).

mod commands;
mod format;
mod parse;
mod state;

use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_action, CliAction};
use state::{config_path, init_config, SessionState};

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    let path = config_path(matches.get_one::<String>("config").map(String::as_str));
    tracing::debug!(target: "stickers::cli", config = %path.display(), ?action, "Dispatching");

    // `init` must work before any manifest exists
    let result = if action == CliAction::Init {
        init_config(&path)
    } else {
        SessionState::open(path).and_then(|state| state.execute(action))
    };

    match result {
        Ok(output) => {
            let formatted = format_output(&output, output_mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STICKERS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
