//! Permudex CLI: Boolean retrieval shell.
//!
//! Three modes:
//! - **Shell mode**: `permudex [flags] COMMAND`: single command, exit
//! - **REPL mode**: `permudex [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "magnet AND field" | permudex --demo`: line-by-line from stdin
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;
use parse::matches_to_request;
use state::SessionState;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut state = match SessionState::open(&matches) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let exit_code = match matches_to_request(&matches) {
            Ok(request) => {
                if repl::execute_request(request, &mut state, output_mode) {
                    0
                } else {
                    1
                }
            }
            Err(e) => {
                eprintln!("(error) {}", e);
                1
            }
        };
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
