pub mod dist;
pub mod matrix;
pub mod pipeline;
pub mod report;
pub mod termfreq;
pub mod tokenizer;

pub use matrix::{
    ColumnId, IdfTable, SparseVector, TermDocumentMatrix, TermFrequencyMap, TermIndex, VocabEntry,
};
