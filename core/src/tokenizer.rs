use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Load a stop-word set from a file, one word per line.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let f = File::open(path.as_ref())?;
    let reader = BufReader::new(f);
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(word.to_lowercase());
        }
    }
    Ok(words)
}

/// Tokenize text into normalized lemmas using NFKC normalization, lowercase,
/// alphabetic-only tokens longer than two characters, stopword removal, and
/// stemming.
pub fn tokenize(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    let mut tokens = Vec::new();
    for mat in RE.find_iter(&normalized) {
        let token = mat.as_str();
        if token.chars().count() <= 2 {
            continue;
        }
        if stop_words.contains(token) {
            continue;
        }
        tokens.push(STEMMER.stem(token).to_string());
    }
    tokens
}
