//! Reference-style link definitions.
//!
//! A definition line looks like `[1]: <https://example.com/>` (angle
//! brackets optional). Collection runs once, before chunking: matching
//! lines are emptied in place so they never reach the output but still act
//! as blank-line separators for the chunker.

use crate::scan;
use rustc_hash::FxBuildHasher as FastHashBuilder;
use std::collections::HashMap;

/// Store of link reference definitions, keyed by the bracketed key literal
/// (brackets included, e.g. `[1]`).
///
/// Two-phase: definitions form an immutable key-to-URL map; the visible text
/// of each key is cached separately when the first usage is seen, and anchors
/// are built fresh at every use.
#[derive(Debug, Default)]
pub struct LinkRefStore {
    keys: Vec<String>,
    urls: HashMap<String, String, FastHashBuilder>,
    inner_text: HashMap<String, String, FastHashBuilder>,
}

impl LinkRefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the document for definition lines, emptying each one in place.
    pub fn collect(lines: &mut [String]) -> Self {
        let mut store = Self::new();
        for line in lines.iter_mut() {
            if let Some((key, url)) = parse_definition(line) {
                store.insert(key, url);
                line.clear();
            }
        }
        store
    }

    /// Add a definition if the key is new. First definition wins.
    fn insert(&mut self, key: String, url: String) {
        if self.urls.contains_key(&key) {
            return;
        }
        self.keys.push(key.clone());
        self.urls.insert(key, url);
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at insertion position `idx`.
    pub fn key(&self, idx: usize) -> Option<&str> {
        self.keys.get(idx).map(String::as_str)
    }

    /// Build the anchor tag for a key, fixing its visible text to the first
    /// text ever offered for it.
    pub fn anchor(&mut self, key: &str, text: &str) -> Option<String> {
        let url = self.urls.get(key)?;
        let text = self
            .inner_text
            .entry(key.to_string())
            .or_insert_with(|| text.to_string());
        let mut tag = String::with_capacity(url.len() + text.len() + 15);
        tag.push_str("<a href=\"");
        tag.push_str(url);
        tag.push_str("\">");
        tag.push_str(text);
        tag.push_str("</a>");
        Some(tag)
    }
}

/// Parse a definition line: bracketed key, colon, whitespace, then a bare or
/// angle-bracketed http(s) URL. Trailing content after the URL is ignored.
/// The pattern must start the trimmed line; definitions buried mid-line are
/// not recognized.
fn parse_definition(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if !line.starts_with('[') {
        return None;
    }
    let close = line.find("]:")?;
    if close < 2 {
        // key literal must be non-empty
        return None;
    }
    let key = &line[..close + 1];
    let rest = &line[close + 2..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('<').unwrap_or(rest);
    let url_len = scan::scan_http_url(rest)?;
    Some((key.to_string(), rest[..url_len].to_string()))
}
