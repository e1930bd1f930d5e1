use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analyzer::KeywordAnalyzer;
use crate::config::AnalyzerConfig;
use crate::errors::AnalyzeResult;
use crate::matcher::build_matcher;
use crate::results::{DocumentResult, DocumentResults};

/// A document queued for analysis: an identifier plus its extracted text.
///
/// Text extraction (PDF, DOCX, and friends) happens upstream; by the time a
/// document reaches the engine its text is an opaque, already-decoded
/// character sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Caller-supplied identifier, typically the source file name
    pub id: String,
    /// Extracted text in natural reading order
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Runs every configured algorithm over every document.
///
/// Each (document, algorithm) analysis is a pure function of its inputs, so
/// documents are processed in parallel; result order always equals input
/// order. Timing inside each analysis uses a monotonic per-invocation clock,
/// so the reported times stay meaningful under parallel execution.
pub fn analyze_documents(
    config: &AnalyzerConfig,
    documents: &[Document],
) -> AnalyzeResult<DocumentResults> {
    config.validate()?;

    info!(
        documents = documents.len(),
        keywords = config.keywords.len(),
        algorithms = config.algorithms.len(),
        "starting batch analysis"
    );

    if documents.is_empty() || config.algorithms.is_empty() {
        debug!("nothing to analyze, returning empty result set");
        return Ok(DocumentResults::new());
    }

    // One analyzer per algorithm, shared across all documents
    let analyzers: Vec<KeywordAnalyzer> = config
        .algorithms
        .iter()
        .map(|&algorithm| {
            build_matcher(algorithm, config.hash_prime, config.hash_radix)
                .map(|matcher| KeywordAnalyzer::new(matcher, config.case_sensitive))
        })
        .collect::<AnalyzeResult<_>>()?;

    // Process documents in parallel with adaptive chunk size
    let thread_count = config.thread_count.get();
    let chunk_size = (documents.len() / thread_count).clamp(1, 64);

    let entries: Vec<DocumentResult> = documents
        .par_chunks(chunk_size)
        .flat_map(|chunk| {
            chunk
                .iter()
                .map(|doc| DocumentResult {
                    document: doc.id.clone(),
                    runs: analyzers
                        .iter()
                        .map(|analyzer| analyzer.analyze(&doc.text, &config.keywords))
                        .collect(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    // Fold through add_result so repeated document identifiers coalesce
    let mut results = DocumentResults::new();
    for entry in entries {
        for run in entry.runs {
            results.add_result(entry.document.clone(), run);
        }
    }

    info!(documents = results.len(), "batch analysis complete");

    Ok(results)
}
