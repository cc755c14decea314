//! TF-IDF matrix construction: document-frequency aggregation, bounded
//! vocabulary selection, IDF and term-index tables, and sparse vector
//! assembly over the partitioned collection.

use crate::dist::{Broadcast, PartitionedCollection};
use crate::report::save_frequency_report;
use crate::termfreq::{term_frequencies, total_terms};
use crate::{ColumnId, IdfTable, SparseVector, TermDocumentMatrix, TermIndex, VocabEntry};
use anyhow::Result;
use std::path::Path;

/// Select the `n` terms appearing in the most documents.
///
/// Each document contributes one `(term, 1)` pair per distinct term it
/// contains, summed across the collection and narrowed with the bounded
/// top-N selection. Result length is at most `n`; equal-count order at the
/// boundary is implementation-defined.
pub fn select_vocabulary(
    docs: &PartitionedCollection<Vec<String>>,
    n: usize,
) -> Vec<VocabEntry> {
    let doc_freqs = docs.reduce_by_key(|tokens| {
        term_frequencies(tokens)
            .into_keys()
            .map(|term| (term, 1))
            .collect()
    });
    doc_freqs
        .top_n_by_value(n)
        .into_iter()
        .map(|(term, doc_freq)| VocabEntry { term, doc_freq })
        .collect()
}

/// IDF per vocabulary term: `log10(num_docs / doc_freq)`.
///
/// `doc_freq >= 1` for every entry by construction, so no zero-division or
/// smoothing path exists. `num_docs` stays a wide integer throughout.
pub fn build_idf_table(vocab: &[VocabEntry], num_docs: u64) -> IdfTable {
    vocab
        .iter()
        .map(|entry| {
            let idf = (num_docs as f64 / entry.doc_freq as f64).log10();
            (entry.term.clone(), idf)
        })
        .collect()
}

/// Assign each vocabulary term a column index in vocabulary order, starting
/// at 0 with no gaps. Returns the forward map and the inverse column-label
/// vector (index -> term).
pub fn build_term_index(vocab: &[VocabEntry]) -> (TermIndex, Vec<String>) {
    let mut index = TermIndex::with_capacity(vocab.len());
    let mut columns = Vec::with_capacity(vocab.len());
    for (column, entry) in vocab.iter().enumerate() {
        index.insert(entry.term.clone(), column);
        columns.push(entry.term.clone());
    }
    (index, columns)
}

/// Assemble one document's sparse TF-IDF vector.
///
/// The total term count includes tokens outside the vocabulary; only indexed
/// terms produce entries, weighted `idf * tf / total`. An empty document, or
/// one with no vocabulary terms, yields a valid all-zero vector.
pub fn assemble_vector(
    tokens: &[String],
    idf: &IdfTable,
    index: &TermIndex,
    dim: usize,
) -> SparseVector {
    let counts = term_frequencies(tokens);
    let total = total_terms(&counts);
    if total == 0 {
        return SparseVector::zero(dim);
    }
    let mut entries: Vec<(ColumnId, f64)> = counts
        .iter()
        .filter_map(|(term, &freq)| {
            let column = *index.get(term)?;
            let weight = idf.get(term)? * freq as f64 / total as f64;
            Some((column, weight))
        })
        .collect();
    entries.sort_unstable_by_key(|&(column, _)| column);
    SparseVector { dim, entries }
}

/// Run the full pipeline over a tokenized corpus.
///
/// Counts documents, selects the vocabulary, persists the frequency report
/// (fatal on failure, before anything downstream consumes the vocabulary),
/// broadcasts the IDF and index tables, and assembles all vectors in
/// parallel. Output vectors are positionally aligned with the input.
pub fn build_matrix<P: AsRef<Path>>(
    docs: &PartitionedCollection<Vec<String>>,
    vocab_size: usize,
    report_path: P,
) -> Result<TermDocumentMatrix> {
    let num_docs = docs.count();
    let vocab = select_vocabulary(docs, vocab_size);
    tracing::info!(num_docs, vocab_size = vocab.len(), "selected vocabulary");

    save_frequency_report(&report_path, &vocab)?;

    let (term_index, columns) = build_term_index(&vocab);
    let dim = columns.len();
    let idf = Broadcast::new(build_idf_table(&vocab, num_docs));
    let term_index = Broadcast::new(term_index);

    let vectors = docs
        .map(|tokens| assemble_vector(tokens, &idf, &term_index, dim))
        .collect();
    Ok(TermDocumentMatrix {
        vectors,
        columns,
        num_docs,
    })
}
