use crate::VocabEntry;
use anyhow::{anyhow, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write one `term\tfrequency` line per vocabulary entry, in vocabulary
/// order. Failure to open or write the destination aborts the run.
pub fn save_frequency_report<P: AsRef<Path>>(path: P, vocab: &[VocabEntry]) -> Result<()> {
    let f = File::create(path.as_ref())?;
    let mut w = BufWriter::new(f);
    for entry in vocab {
        writeln!(w, "{}\t{}", entry.term, entry.doc_freq)?;
    }
    w.flush()?;
    Ok(())
}

/// Read a frequency report back into vocabulary entries, preserving order.
pub fn load_frequency_report<P: AsRef<Path>>(path: P) -> Result<Vec<VocabEntry>> {
    let f = File::open(path.as_ref())?;
    let reader = BufReader::new(f);
    let mut vocab = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (term, freq) = line
            .split_once('\t')
            .ok_or_else(|| anyhow!("malformed report line: {line}"))?;
        vocab.push(VocabEntry {
            term: term.to_string(),
            doc_freq: freq.parse()?,
        });
    }
    Ok(vocab)
}
