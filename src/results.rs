use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::matcher::Algorithm;

/// Rounds `value` to `decimals` decimal places
pub(crate) fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Outcome of running one algorithm over one document's keyword list.
///
/// Immutable once produced: the analyzer builds it in a single pass and no
/// component mutates it afterwards. Field names are the exported record
/// schema and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// The algorithm that produced this result
    pub algorithm: Algorithm,
    /// Keywords found at least once, in input order
    pub matched_keywords: Vec<String>,
    /// Keywords not found, in input order
    pub missing_keywords: Vec<String>,
    /// Number of matched keywords
    pub matches: usize,
    /// Number of keywords searched
    pub total_keywords: usize,
    /// Percentage of keywords matched, rounded to 2 decimals; identical
    /// across algorithms for the same document and keyword list
    pub relevance_score: f64,
    /// Total comparisons across all keyword searches, per the algorithm's
    /// own comparison definition
    pub comparisons: u64,
    /// Wall-clock time for the whole keyword loop, in milliseconds rounded
    /// to 3 decimals; a relative indicator, not a benchmark guarantee
    pub execution_time: f64,
    /// Occurrence count per matched keyword
    pub keyword_positions: BTreeMap<String, u64>,
}

/// One document's results, in the order the algorithms ran
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentResult {
    /// Document identifier supplied by the caller
    pub document: String,
    /// One result per algorithm run against this document
    pub runs: Vec<AnalysisResult>,
}

/// Results for a whole batch, preserving document encounter order.
///
/// Encounter order matters: ranking is stable, so documents with equal
/// scores keep the order in which they were first added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentResults {
    /// Per-document results in encounter order
    pub documents: Vec<DocumentResult>,
}

impl DocumentResults {
    /// Creates an empty result set
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a run for `document`, creating its entry on first sight
    pub fn add_result(&mut self, document: impl Into<String>, result: AnalysisResult) {
        let document = document.into();
        match self.documents.iter_mut().find(|d| d.document == document) {
            Some(entry) => entry.runs.push(result),
            None => self.documents.push(DocumentResult {
                document,
                runs: vec![result],
            }),
        }
    }

    /// Looks up one document's results
    pub fn get(&self, document: &str) -> Option<&DocumentResult> {
        self.documents.iter().find(|d| d.document == document)
    }

    /// Iterates documents in encounter order
    pub fn iter(&self) -> impl Iterator<Item = &DocumentResult> {
        self.documents.iter()
    }

    /// Number of documents in the set
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Merges another result set into this one. Runs for documents already
    /// present are appended to the existing entry; new documents keep their
    /// relative order after the current ones.
    pub fn merge(&mut self, other: DocumentResults) {
        for entry in other.documents {
            match self.documents.iter_mut().find(|d| d.document == entry.document) {
                Some(existing) => existing.runs.extend(entry.runs),
                None => self.documents.push(entry),
            }
        }
    }
}
