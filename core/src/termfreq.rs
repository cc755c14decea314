use crate::TermFrequencyMap;

/// Count occurrences of each distinct term in one document's token sequence.
/// An empty document yields an empty map.
pub fn term_frequencies(tokens: &[String]) -> TermFrequencyMap {
    let mut counts = TermFrequencyMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Total number of term occurrences in a document, retained or not.
pub fn total_terms(counts: &TermFrequencyMap) -> u64 {
    counts.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repetitions() {
        let tokens: Vec<String> = ["a", "a", "a"].iter().map(|s| s.to_string()).collect();
        let counts = term_frequencies(&tokens);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["a"], 3);
        assert_eq!(total_terms(&counts), 3);
    }

    #[test]
    fn empty_document_is_empty_map() {
        let counts = term_frequencies(&[]);
        assert!(counts.is_empty());
        assert_eq!(total_terms(&counts), 0);
    }
}
