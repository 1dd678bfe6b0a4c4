//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): `{Doc1, Doc2}`, `(empty)`, one dump entry per line
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use permudex_core::Error;
use permudex_search::DocSet;
use serde_json::{json, Value};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&to_json(output)),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&json!({ "error": err.to_string() })),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// =========================================================================
// Human
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Docs(docs) => format_doc_set(docs),
        Output::Added { doc_id, terms } => format!("OK ({}, {} terms)", doc_id, terms),
        Output::Index(entries) => {
            if entries.is_empty() {
                return "(empty)".to_string();
            }
            entries
                .iter()
                .map(|(term, postings)| {
                    let ids: Vec<&str> = postings.iter().map(|id| id.as_str()).collect();
                    format!("{}: {{{}}}", term, ids.join(", "))
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Permuterm(pairs) => {
            if pairs.is_empty() {
                return "(empty)".to_string();
            }
            pairs
                .iter()
                .map(|(rotation, term)| format!("{} -> {}", rotation, term))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Output::Stats(stats) => format!(
            "documents: {}\nterms: {}\nrotations: {}\ntree_height: {}\ntree_nodes: {}",
            stats.documents, stats.terms, stats.rotations, stats.tree_height, stats.tree_nodes
        ),
        Output::Text(text) => text.trim_end().to_string(),
    }
}

/// `{Doc1, Doc2}`, or `(empty)` for no hits.
pub fn format_doc_set(docs: &DocSet) -> String {
    if docs.is_empty() {
        return "(empty)".to_string();
    }
    let ids: Vec<&str> = docs.iter().map(|id| id.as_str()).collect();
    format!("{{{}}}", ids.join(", "))
}

// =========================================================================
// JSON
// =========================================================================

fn to_json(output: &Output) -> Value {
    match output {
        Output::Docs(docs) => json!(docs),
        Output::Added { doc_id, terms } => json!({ "added": doc_id, "terms": terms }),
        Output::Index(entries) => Value::Object(
            entries
                .iter()
                .map(|(term, postings)| (term.clone(), json!(postings)))
                .collect(),
        ),
        Output::Permuterm(pairs) => Value::Array(
            pairs
                .iter()
                .map(|(rotation, term)| json!({ "rotation": rotation, "term": term }))
                .collect(),
        ),
        Output::Stats(stats) => json!(stats),
        Output::Text(text) => json!(text),
    }
}
