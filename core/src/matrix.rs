use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column index into the term-document matrix.
pub type ColumnId = usize;

/// Term -> column index over the retained vocabulary.
/// Bijective onto `[0, vocabulary size)`.
pub type TermIndex = HashMap<String, ColumnId>;

/// Term -> inverse-document-frequency weight over the retained vocabulary.
pub type IdfTable = HashMap<String, f64>;

/// Term -> within-document occurrence count, scoped to one document.
pub type TermFrequencyMap = HashMap<String, u64>;

/// One retained vocabulary term and the number of documents containing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub term: String,
    pub doc_freq: u64,
}

/// Sparse TF-IDF vector for one document.
/// Entries are sorted by column and carry no duplicates; `dim` equals the
/// vocabulary size for every vector in a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub dim: usize,
    pub entries: Vec<(ColumnId, f64)>,
}

impl SparseVector {
    /// The all-zero vector of the given dimension.
    pub fn zero(dim: usize) -> Self {
        Self { dim, entries: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The pipeline output: one sparse vector per input document (positionally
/// aligned), plus the column labels for interpreting matrix columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermDocumentMatrix {
    pub vectors: Vec<SparseVector>,
    /// index -> term, in vocabulary order
    pub columns: Vec<String>,
    pub num_docs: u64,
}
