//! Dump record splitting and article plain-text extraction.
//!
//! A dump is split into records between configurable boundary delimiters.
//! Extraction returns `None` for anything that is not an article body:
//! records without text, redirects, disambiguation pages, and pages outside
//! the main namespace. Callers treat `None` as "skip", never as an error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"(?s)<title>(.*?)</title>").expect("valid regex");
    static ref TEXT_RE: Regex = Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("valid regex");
    static ref COMMENT_RE: Regex = Regex::new(r"(?s)<!--.*?-->").expect("valid regex");
    static ref REF_RE: Regex =
        Regex::new(r"(?s)<ref[^>]*/>|<ref[^>]*>.*?</ref>").expect("valid regex");
    static ref TEMPLATE_RE: Regex = Regex::new(r"\{\{[^{}]*\}\}").expect("valid regex");
    static ref MEDIA_LINK_RE: Regex =
        Regex::new(r"\[\[(?:File|Image|Category):[^\[\]]*\]\]").expect("valid regex");
    static ref PIPED_LINK_RE: Regex =
        Regex::new(r"\[\[[^\[\]|]*\|([^\[\]]*)\]\]").expect("valid regex");
    static ref LINK_RE: Regex = Regex::new(r"\[\[([^\[\]]*)\]\]").expect("valid regex");
    static ref TAG_RE: Regex = Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid regex");
    static ref ENTITY_RE: Regex = Regex::new(r"&[a-z]+;").expect("valid regex");
}

/// Split dump content into record payloads between `open` and `close`.
/// A trailing record with no closing delimiter is dropped.
pub fn split_records<'a>(content: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut records = Vec::new();
    let mut rest = content;
    while let Some(start) = rest.find(open) {
        let after = &rest[start + open.len()..];
        match after.find(close) {
            Some(end) => {
                records.push(&after[..end]);
                rest = &after[end + close.len()..];
            }
            None => break,
        }
    }
    records
}

/// Extract the plain article body from one record, or `None` if the record
/// should be skipped.
pub fn extract_article(record: &str) -> Option<String> {
    let title = TITLE_RE.captures(record)?.get(1)?.as_str().trim();
    if title.contains(':') {
        return None;
    }
    if title.to_lowercase().contains("(disambiguation)") {
        return None;
    }
    let text = TEXT_RE.captures(record)?.get(1)?.as_str().trim();
    if text.is_empty() {
        return None;
    }
    if text.to_uppercase().starts_with("#REDIRECT") {
        return None;
    }
    Some(strip_markup(text))
}

/// Best-effort wiki markup removal: templates, refs, comments, and media
/// links disappear whole; ordinary links keep their visible text.
fn strip_markup(text: &str) -> String {
    let text = COMMENT_RE.replace_all(text, " ");
    let text = REF_RE.replace_all(&text, " ");
    let text = TEMPLATE_RE.replace_all(&text, " ");
    let text = MEDIA_LINK_RE.replace_all(&text, " ");
    let text = PIPED_LINK_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = TAG_RE.replace_all(&text, " ");
    ENTITY_RE.replace_all(&text, " ").into_owned()
}
