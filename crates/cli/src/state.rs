//! Session wrapper around a [`BooleanModel`].
//!
//! Builds the model from the command-line corpus flags and carries out
//! requests against it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::ArgMatches;
use permudex_core::{DocId, Error, IndexConfig, PostingList, Term, CONFIG_FILE_NAME};
use permudex_search::{BooleanModel, DocSet, ModelStats};

use crate::parse::Request;

/// First document of the demo corpus.
pub const DEMO_DOC1: &str = "At very low temperatures, superconductors have zero resistance, \
    but they can also repel an external magnetic field, in such a way \
    that a spinning magnet can be held in a levitated position.";

/// Second document of the demo corpus.
pub const DEMO_DOC2: &str = "If a small magnet is brought near a superconductor, \
    it will be repelled.";

/// Result of a request, ready for formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Docs(DocSet),
    Added { doc_id: DocId, terms: usize },
    Index(Vec<(Term, PostingList)>),
    Permuterm(Vec<(String, Term)>),
    Stats(ModelStats),
    Text(String),
}

/// Owns the model for the lifetime of the shell.
pub struct SessionState {
    model: BooleanModel,
}

impl SessionState {
    /// Wrap an existing model.
    pub fn new(model: BooleanModel) -> Self {
        Self { model }
    }

    /// Build a session from `--config`, `--demo`, `--doc` and `--dir`.
    ///
    /// Without `--config`, a `permudex.toml` in the working directory is used
    /// if present.
    pub fn open(matches: &ArgMatches) -> anyhow::Result<Self> {
        let config_path = match matches.get_one::<String>("config") {
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        };
        let config = match config_path {
            Some(path) => IndexConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => IndexConfig::default(),
        };
        let mut state = Self::new(BooleanModel::with_config(&config));

        if matches.get_flag("demo") {
            state.load_demo();
        }
        if let Some(args) = matches.get_many::<String>("doc") {
            for arg in args {
                state.load_doc_arg(arg)?;
            }
        }
        if let Some(dir) = matches.get_one::<String>("dir") {
            state.load_dir(Path::new(dir))?;
        }

        tracing::info!(
            target: "permudex::cli",
            documents = state.model.document_count(),
            terms = state.model.tree().len(),
            "Corpus loaded"
        );
        Ok(state)
    }

    /// Index the two demo documents.
    pub fn load_demo(&mut self) {
        self.model.add_document("Doc1", DEMO_DOC1);
        self.model.add_document("Doc2", DEMO_DOC2);
    }

    /// Index one `ID=PATH` document.
    pub fn load_doc_arg(&mut self, arg: &str) -> anyhow::Result<()> {
        let (doc_id, path) = match arg.split_once('=') {
            Some((id, path)) if !id.is_empty() && !path.is_empty() => (id, path),
            _ => bail!("Expected ID=PATH, got '{}'", arg),
        };
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        self.model.add_document(doc_id, &text);
        Ok(())
    }

    /// Index every regular file in `dir`, in path order, keyed by file stem.
    pub fn load_dir(&mut self, dir: &Path) -> anyhow::Result<()> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        for path in paths {
            let doc_id = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        target: "permudex::cli",
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable file"
                    );
                    continue;
                }
            };
            self.model.add_document(doc_id, &text);
        }
        Ok(())
    }

    /// Carry out a request.
    pub fn execute(&mut self, request: Request) -> Result<Output, Error> {
        let output = match request {
            Request::Query(query) => Output::Docs(self.model.try_boolean_query(&query)?),
            Request::Add { doc_id, text } => {
                let terms = self.model.analyzer().analyze_unique(&text).len();
                self.model.add_document(doc_id.as_str(), &text);
                Output::Added {
                    doc_id: DocId::from(doc_id),
                    terms,
                }
            }
            Request::DumpIndex => Output::Index(
                self.model
                    .dump_index()
                    .into_iter()
                    .map(|(term, postings)| (term.to_string(), postings.clone()))
                    .collect(),
            ),
            Request::DumpPermuterm => Output::Permuterm(
                self.model
                    .dump_permuterm_index()
                    .into_iter()
                    .map(|(rotation, term)| (rotation.to_string(), term.to_string()))
                    .collect(),
            ),
            Request::Stats => Output::Stats(self.model.stats()),
            Request::DefaultConfig => Output::Text(IndexConfig::default_toml().to_string()),
        };
        Ok(output)
    }

    /// The underlying model.
    pub fn model(&self) -> &BooleanModel {
        &self.model
    }
}
