//! ArgMatches and input lines → CliAction conversion.
//!
//! - Subcommands and plain query lines → `CliAction::Execute(Request)`
//! - REPL meta-commands → `CliAction::Meta`

use clap::ArgMatches;

/// Work the session can carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Evaluate a Boolean query
    Query(String),
    /// Index a document given inline
    Add { doc_id: String, text: String },
    /// Dump the term index
    DumpIndex,
    /// Dump the permuterm index
    DumpPermuterm,
    /// Size counters
    Stats,
    /// Default configuration file
    DefaultConfig,
}

/// Shell-only commands that never touch the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Execute(Request),
    Meta(MetaCommand),
}

/// Convert clap ArgMatches into a request (one-shot mode).
pub fn matches_to_request(matches: &ArgMatches) -> Result<Request, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "query" => {
            let words: Vec<&str> = sub_matches
                .get_many::<String>("query")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            Ok(Request::Query(words.join(" ")))
        }
        "index" => Ok(Request::DumpIndex),
        "permuterm" => Ok(Request::DumpPermuterm),
        "stats" => Ok(Request::Stats),
        "config" => Ok(Request::DefaultConfig),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Interpret one REPL or pipe line.
///
/// A line whose first word is a known command is that command; anything
/// else is evaluated as a query.
pub fn parse_line(line: &str) -> Result<CliAction, String> {
    let trimmed = line.trim();
    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (trimmed, ""),
    };

    let action = match (cmd, rest.is_empty()) {
        ("help", true) => CliAction::Meta(MetaCommand::Help),
        ("quit" | "exit", true) => CliAction::Meta(MetaCommand::Quit),
        ("index", true) => CliAction::Execute(Request::DumpIndex),
        ("permuterm", true) => CliAction::Execute(Request::DumpPermuterm),
        ("stats", true) => CliAction::Execute(Request::Stats),
        ("add", true) => return Err("usage: add <ID> <TEXT>".to_string()),
        ("add", false) => {
            let (doc_id, text) = match rest.split_once(char::is_whitespace) {
                Some((id, text)) => (id, text.trim()),
                None => (rest, ""),
            };
            CliAction::Execute(Request::Add {
                doc_id: doc_id.to_string(),
                text: text.to_string(),
            })
        }
        _ => CliAction::Execute(Request::Query(trimmed.to_string())),
    };
    Ok(action)
}
