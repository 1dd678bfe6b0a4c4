//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{parse_line, CliAction, MetaCommand, Request};
use crate::state::SessionState;

const PROMPT: &str = "permudex> ";

/// Run the interactive REPL.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<PermudexHelper, _> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(PermudexHelper));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    println!(
        "{} documents indexed. Type 'help' for commands, 'quit' to exit.",
        state.model().document_count()
    );

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match parse_line(trimmed) {
                    Ok(CliAction::Meta(MetaCommand::Quit)) => break,
                    Ok(CliAction::Meta(MetaCommand::Help)) => print_help(),
                    Ok(CliAction::Execute(request)) => {
                        execute_request(request, state, mode);
                    }
                    Err(e) => eprintln!("(error) {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: just show new prompt
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: one query or command per stdin line.
///
/// Blank lines and `#` comments are skipped. Returns 1 if any line failed.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok(CliAction::Meta(MetaCommand::Quit)) => break,
            Ok(CliAction::Meta(MetaCommand::Help)) => print_help(),
            Ok(CliAction::Execute(request)) => {
                if !execute_request(request, state, mode) {
                    exit_code = 1;
                }
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                exit_code = 1;
            }
        }
    }

    exit_code
}

/// Execute a request and print the result. Returns true on success.
pub fn execute_request(request: Request, state: &mut SessionState, mode: OutputMode) -> bool {
    match state.execute(request) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.permudex_history", h))
}

fn print_help() {
    println!("Queries:");
    println!("  term                      Documents containing term");
    println!("  a AND b | a OR b | a XOR b");
    println!("  a AND NOT b | a OR NOT b | a NOT b");
    println!("  NOT a | a NOT              Complement against all documents");
    println!("  Wildcards: pre*  *suf  pre*suf  *");
    println!();
    println!("Commands:");
    println!("  add <ID> <TEXT>           Index a document");
    println!("  index                     Dump terms with postings");
    println!("  permuterm                 Dump (rotation, term) pairs");
    println!("  stats                     Index size counters");
    println!("  help                      Show this help");
    println!("  quit / exit               Exit REPL");
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Commands and operators offered by TAB completion.
const COMPLETIONS: &[&str] = &[
    "add", "index", "permuterm", "stats", "help", "quit", "exit", "AND", "OR", "NOT", "XOR",
];

struct PermudexHelper;

impl Helper for PermudexHelper {}
impl Validator for PermudexHelper {}
impl Highlighter for PermudexHelper {}
impl Hinter for PermudexHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for PermudexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = completion_candidates(&line[..pos]);
        let candidates = words
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Byte offset of the word under the cursor and the completions for it.
fn completion_candidates(line_to_pos: &str) -> (usize, Vec<&'static str>) {
    let start = line_to_pos
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let prefix = &line_to_pos[start..];
    let first_word = line_to_pos[..start].trim().is_empty();

    let words = COMPLETIONS
        .iter()
        .copied()
        .filter(|word| {
            // Commands only make sense as the first word, operators after it
            let is_operator = word.chars().all(|c| c.is_ascii_uppercase());
            first_word != is_operator
        })
        .filter(|word| word.starts_with(prefix))
        .collect();
    (start, words)
}
