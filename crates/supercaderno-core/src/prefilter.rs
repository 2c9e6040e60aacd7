//! Keyword-coverage prefilter
//!
//! Derives a keyword set from a topic label and decides whether a
//! document plausibly covers that topic. This is the cheap, explainable
//! gate in front of every expensive downstream call: a false positive
//! costs one wasted call later, a false negative silently drops content,
//! so the default threshold biases toward inclusion.

use crate::text::fold_lower;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

lazy_static! {
    // Runs of letters (including accented) and digits
    static ref TOKEN_RE: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();
}

/// Derive the ordered keyword set of a topic label.
///
/// Tokens of length <= 2 are dropped, the rest are accent-folded and
/// lowercased, deduplicated preserving first occurrence. Deterministic:
/// the same label always yields the same sequence.
pub fn derive_keywords(label: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in TOKEN_RE.find_iter(label) {
        if token.as_str().chars().count() <= 2 {
            continue;
        }
        let folded = fold_lower(token.as_str());
        if !keywords.contains(&folded) {
            keywords.push(folded);
        }
    }
    keywords
}

/// Decide whether `document_text` covers `label`.
///
/// The document is folded once, then each keyword counts at most one hit
/// regardless of how often it repeats; frequency is not a relevance
/// signal here.
pub fn covers(document_text: &str, label: &str, min_hits: usize) -> bool {
    let corpus = fold_lower(document_text);
    let hits = derive_keywords(label)
        .iter()
        .filter(|kw| corpus.contains(kw.as_str()))
        .count();
    hits >= min_hits
}

/// Document x topic coverage, produced once per run and read-only after.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct CoverageMatrix {
    by_doc: BTreeMap<String, BTreeMap<String, bool>>,
}

impl CoverageMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc_name: &str, topic: &str, covered: bool) {
        self.by_doc
            .entry(doc_name.to_string())
            .or_default()
            .insert(topic.to_string(), covered);
    }

    /// Iterate documents with their per-topic decisions
    pub fn by_doc(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, bool>)> {
        self.by_doc.iter()
    }

    /// Topics a document covers, in map order
    pub fn hits_for(&self, doc_name: &str) -> Vec<String> {
        self.by_doc
            .get(doc_name)
            .map(|topics| {
                topics
                    .iter()
                    .filter(|(_, covered)| **covered)
                    .map(|(topic, _)| topic.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Coverage in report form: document name to list of covered topics
    pub fn to_report(&self) -> BTreeMap<String, Vec<String>> {
        self.by_doc
            .keys()
            .map(|doc| (doc.clone(), self.hits_for(doc)))
            .collect()
    }

    /// Totals over all pairs: (pairs, hits, skips)
    pub fn totals(&self) -> (usize, usize, usize) {
        let pairs: usize = self.by_doc.values().map(|t| t.len()).sum();
        let hits: usize = self
            .by_doc
            .values()
            .flat_map(|t| t.values())
            .filter(|covered| **covered)
            .count();
        (pairs, hits, pairs - hits)
    }
}
