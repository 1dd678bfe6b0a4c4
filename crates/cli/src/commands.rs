//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("permudex")
        .about("Boolean retrieval over a 2-3 tree term index with permuterm wildcards")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("TOML")
                .help("Analyzer configuration file")
                .global(true),
        )
        .arg(
            Arg::new("doc")
                .long("doc")
                .value_name("ID=PATH")
                .help("Index the file at PATH under ID (repeatable)")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .value_name("PATH")
                .help("Index every regular file in PATH, keyed by file stem")
                .global(true),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Load the two-document superconductor corpus")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("query")
                .about("Evaluate a Boolean query, e.g. 'magnet AND NOT super*'")
                .arg(
                    Arg::new("query")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(Command::new("index").about("Dump every term with its postings"))
        .subcommand(Command::new("permuterm").about("Dump every (rotation, term) pair"))
        .subcommand(Command::new("stats").about("Show index size counters"))
        .subcommand(Command::new("config").about("Print the default permudex.toml"))
}
