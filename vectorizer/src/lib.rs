pub mod wiki;

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wikimatrix_core::dist::PartitionedCollection;
use wikimatrix_core::pipeline::build_matrix;
use wikimatrix_core::tokenizer::{load_stop_words, tokenize};
use wikimatrix_core::TermDocumentMatrix;

pub struct BuildOptions {
    pub input: PathBuf,
    pub report: PathBuf,
    pub stopwords: PathBuf,
    pub vocab_size: usize,
    pub partitions: usize,
    pub open_delim: String,
    pub close_delim: String,
}

/// Run the full dump-to-matrix pipeline: discover dump files, split records,
/// extract and tokenize article bodies, then build the TF-IDF matrix and
/// write the frequency report.
pub fn run_build(opts: &BuildOptions) -> Result<TermDocumentMatrix> {
    let stop_words = load_stop_words(&opts.stopwords)?;

    let mut documents: Vec<Vec<String>> = Vec::new();
    for file in discover_inputs(&opts.input) {
        let content = fs::read_to_string(&file)?;
        for record in wiki::split_records(&content, &opts.open_delim, &opts.close_delim) {
            if let Some(body) = wiki::extract_article(record) {
                documents.push(tokenize(&body, &stop_words));
            }
        }
        tracing::debug!(file = %file.display(), "processed dump file");
    }
    tracing::info!(num_docs = documents.len(), "extracted articles");

    let docs = PartitionedCollection::from_vec(documents, opts.partitions);
    build_matrix(&docs, opts.vocab_size, &opts.report)
}

/// A file input is used as-is; a directory is walked for dump chunks.
fn discover_inputs(input: &Path) -> Vec<PathBuf> {
    if input.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(input)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    } else {
        vec![input.to_path_buf()]
    }
}
