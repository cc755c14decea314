use std::fs;
use vectorizer::{run_build, BuildOptions};

const DUMP: &str = concat!(
    "<mediawiki>",
    "<page><title>Cats</title>",
    "<text>Cats hunting mice. Cats sleeping everywhere. Cats purring.</text></page>",
    "<page><title>Dogs</title>",
    "<text>Dogs barking loudly. Dogs chasing cats around gardens.</text></page>",
    "<page><title>Kitty</title><text>#REDIRECT [[Cats]]</text></page>",
    "<page><title>Talk:Dogs</title><text>Discussion page.</text></page>",
    "</mediawiki>"
);

#[test]
fn builds_matrix_from_dump_file() {
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("dump.xml");
    let stop_path = dir.path().join("stopwords.txt");
    let report_path = dir.path().join("freq.tsv");
    fs::write(&dump_path, DUMP).unwrap();
    fs::write(&stop_path, "the\nand\n").unwrap();

    let opts = BuildOptions {
        input: dump_path,
        report: report_path.clone(),
        stopwords: stop_path,
        vocab_size: 10,
        partitions: 2,
        open_delim: "<page>".into(),
        close_delim: "</page>".into(),
    };
    let matrix = run_build(&opts).unwrap();

    // redirect and namespaced pages are skipped
    assert_eq!(matrix.num_docs, 2);
    assert_eq!(matrix.vectors.len(), 2);
    assert!(!matrix.columns.is_empty());
    assert!(matrix.columns.len() <= 10);
    // "cat" appears in both articles
    assert!(matrix.columns.iter().any(|c| c == "cat"));

    let report = fs::read_to_string(&report_path).unwrap();
    assert_eq!(report.lines().count(), matrix.columns.len());
    assert!(report.lines().all(|l| l.contains('\t')));
}

#[test]
fn missing_stopword_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("dump.xml");
    fs::write(&dump_path, DUMP).unwrap();
    let opts = BuildOptions {
        input: dump_path,
        report: dir.path().join("freq.tsv"),
        stopwords: dir.path().join("nope.txt"),
        vocab_size: 10,
        partitions: 1,
        open_delim: "<page>".into(),
        close_delim: "</page>".into(),
    };
    assert!(run_build(&opts).is_err());
}
