//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("stickers")
        .about("Find stickers by tag and copy them")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file (default: ./stickers.toml)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (file ids only)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_tags())
        .subcommand(build_default())
        .subcommand(build_filter())
        .subcommand(build_copy())
        .subcommand(build_recent())
        .subcommand(build_init())
}

fn page_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("page")
            .long("page")
            .short('p')
            .value_name("N")
            .value_parser(clap::value_parser!(usize))
            .default_value("1")
            .help("1-based page number"),
    )
    .arg(
        Arg::new("page-size")
            .long("page-size")
            .short('n')
            .value_name("N")
            .value_parser(clap::value_parser!(usize))
            .default_value("20")
            .help("Results per page"),
    )
}

fn build_search() -> Command {
    page_args(
        Command::new("search")
            .about("Rank tags by prefix match against a keyword")
            .arg(
                Arg::new("keyword")
                    .default_value("")
                    .help("Keyword; empty shows the default view"),
            ),
    )
}

fn build_tags() -> Command {
    Command::new("tags").about("List every distinct tag")
}

fn build_default() -> Command {
    Command::new("default").about("Show the view used when no keyword is typed")
}

fn build_filter() -> Command {
    page_args(
        Command::new("filter")
            .about("List stickers carrying all of the given tags")
            .arg(
                Arg::new("tags")
                    .num_args(0..)
                    .value_name("TAG")
                    .help("Exact, case-sensitive tags; none lists every sticker"),
            ),
    )
}

fn build_copy() -> Command {
    Command::new("copy")
        .about("Copy a sticker's image to a file and mark it recently used")
        .arg(
            Arg::new("file-id")
                .required(true)
                .value_name("FILE_ID")
                .help("Sticker file id"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .short('t')
                .help("Tag the sticker was found under"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .required(true)
                .value_name("PATH")
                .help("Destination for the image bytes"),
        )
}

fn build_recent() -> Command {
    Command::new("recent")
        .about("List recently used stickers")
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('n')
                .value_parser(clap::value_parser!(usize))
                .help("Maximum entries to show"),
        )
}

fn build_init() -> Command {
    Command::new("init").about("Write a default config file if none exists")
}
