//! Pure aggregation over collections of analysis results: the flat
//! (document, algorithm) table, relevance ranking, and derived statistics.

use serde::{Deserialize, Serialize};

use crate::matcher::Algorithm;
use crate::results::{round_dp, AnalysisResult, DocumentResults};

/// One row of the flat (document, algorithm) table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateRow {
    pub document: String,
    pub algorithm: Algorithm,
    pub matches: usize,
    pub total_keywords: usize,
    pub relevance_score: f64,
    pub execution_time: f64,
    pub comparisons: u64,
    /// Matched keywords, comma-joined for tabular rendering
    pub matched_keywords: String,
    /// Missing keywords, comma-joined for tabular rendering
    pub missing_keywords: String,
}

/// Criterion for picking the best algorithm run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Lowest execution time
    Time,
    /// Fewest comparisons
    Comparisons,
    /// Highest relevance score
    Score,
}

/// Cross-run statistics for a set of algorithm results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSummary {
    pub total_algorithms: usize,
    /// Sum of execution times in milliseconds, 3 decimals
    pub total_time: f64,
    pub total_comparisons: u64,
    /// Mean relevance score, 2 decimals
    pub average_score: f64,
    pub fastest_algorithm: Algorithm,
    pub fastest_time: f64,
    pub most_efficient_algorithm: Algorithm,
    pub most_efficient_comparisons: u64,
    pub highest_score_algorithm: Algorithm,
    pub highest_score_value: f64,
}

/// Flattens a result set into one row per (document, algorithm)
pub fn aggregate(results: &DocumentResults) -> Vec<AggregateRow> {
    let mut rows = Vec::new();
    for entry in results.iter() {
        for run in &entry.runs {
            rows.push(AggregateRow {
                document: entry.document.clone(),
                algorithm: run.algorithm,
                matches: run.matches,
                total_keywords: run.total_keywords,
                relevance_score: run.relevance_score,
                execution_time: run.execution_time,
                comparisons: run.comparisons,
                matched_keywords: run.matched_keywords.join(", "),
                missing_keywords: run.missing_keywords.join(", "),
            });
        }
    }
    rows
}

/// Ranks documents by relevance score, descending.
///
/// With a specific algorithm, each document contributes that algorithm's
/// score (documents that never ran it are skipped); with `None`, the mean
/// across all of the document's runs. The sort is stable, so equal scores
/// keep document encounter order.
pub fn rank(results: &DocumentResults, algorithm: Option<Algorithm>) -> Vec<(String, f64)> {
    let mut rankings = Vec::new();

    for entry in results.iter() {
        let score = match algorithm {
            Some(wanted) => match entry.runs.iter().find(|r| r.algorithm == wanted) {
                Some(run) => run.relevance_score,
                None => continue,
            },
            None => {
                if entry.runs.is_empty() {
                    continue;
                }
                let sum: f64 = entry.runs.iter().map(|r| r.relevance_score).sum();
                sum / entry.runs.len() as f64
            }
        };
        rankings.push((entry.document.clone(), score));
    }

    rankings.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    rankings
}

/// Speedup of `baseline_ms` relative to `compared_ms`, 2 decimals.
///
/// Returns 0.0 when `compared_ms` is 0: that means "no slowdown data", not
/// an error.
pub fn speedup(baseline_ms: f64, compared_ms: f64) -> f64 {
    if compared_ms == 0.0 {
        return 0.0;
    }
    round_dp(baseline_ms / compared_ms, 2)
}

/// Comparisons per text character, 4 decimals; 0 for empty text
pub fn efficiency(comparisons: u64, text_length: usize) -> f64 {
    if text_length == 0 {
        return 0.0;
    }
    round_dp(comparisons as f64 / text_length as f64, 4)
}

/// Picks the best run by the given criterion. Ties go to the first run
/// encountered.
pub fn best_by(results: &[AnalysisResult], criterion: Criterion) -> Option<&AnalysisResult> {
    let mut best: Option<&AnalysisResult> = None;
    for run in results {
        let beats = match (criterion, best) {
            (_, None) => true,
            (Criterion::Time, Some(b)) => run.execution_time < b.execution_time,
            (Criterion::Comparisons, Some(b)) => run.comparisons < b.comparisons,
            (Criterion::Score, Some(b)) => run.relevance_score > b.relevance_score,
        };
        if beats {
            best = Some(run);
        }
    }
    best
}

/// Summarizes a set of algorithm runs: totals, mean score, and the fastest,
/// most comparison-efficient, and highest-scoring runs (stable on ties).
/// Returns `None` for empty input.
pub fn summary(results: &[AnalysisResult]) -> Option<PerformanceSummary> {
    if results.is_empty() {
        return None;
    }

    let fastest = best_by(results, Criterion::Time)?;
    let most_efficient = best_by(results, Criterion::Comparisons)?;
    let highest = best_by(results, Criterion::Score)?;

    let total_time: f64 = results.iter().map(|r| r.execution_time).sum();
    let total_comparisons: u64 = results.iter().map(|r| r.comparisons).sum();
    let average_score: f64 =
        results.iter().map(|r| r.relevance_score).sum::<f64>() / results.len() as f64;

    Some(PerformanceSummary {
        total_algorithms: results.len(),
        total_time: round_dp(total_time, 3),
        total_comparisons,
        average_score: round_dp(average_score, 2),
        fastest_algorithm: fastest.algorithm,
        fastest_time: round_dp(fastest.execution_time, 3),
        most_efficient_algorithm: most_efficient.algorithm,
        most_efficient_comparisons: most_efficient.comparisons,
        highest_score_algorithm: highest.algorithm,
        highest_score_value: round_dp(highest.relevance_score, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn run(algorithm: Algorithm, score: f64, time: f64, comparisons: u64) -> AnalysisResult {
        AnalysisResult {
            algorithm,
            matched_keywords: vec!["Python".to_string(), "SQL".to_string()],
            missing_keywords: vec!["Rust".to_string()],
            matches: 2,
            total_keywords: 3,
            relevance_score: score,
            comparisons,
            execution_time: time,
            keyword_positions: BTreeMap::new(),
        }
    }

    fn result_set() -> DocumentResults {
        let mut results = DocumentResults::new();
        results.add_result("cv_a", run(Algorithm::BruteForce, 66.67, 0.5, 300));
        results.add_result("cv_a", run(Algorithm::Kmp, 66.67, 0.2, 120));
        results.add_result("cv_b", run(Algorithm::BruteForce, 100.0, 0.4, 280));
        results.add_result("cv_b", run(Algorithm::Kmp, 100.0, 0.3, 110));
        results.add_result("cv_c", run(Algorithm::BruteForce, 66.67, 0.6, 310));
        results.add_result("cv_c", run(Algorithm::Kmp, 66.67, 0.25, 130));
        results
    }

    #[test]
    fn test_aggregate_one_row_per_document_algorithm() {
        let rows = aggregate(&result_set());
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].document, "cv_a");
        assert_eq!(rows[0].algorithm, Algorithm::BruteForce);
        assert_eq!(rows[0].matched_keywords, "Python, SQL");
        assert_eq!(rows[0].missing_keywords, "Rust");
    }

    #[test]
    fn test_rank_by_algorithm() {
        let ranked = rank(&result_set(), Some(Algorithm::Kmp));
        assert_eq!(ranked[0], ("cv_b".to_string(), 100.0));
        // cv_a and cv_c tie; encounter order is preserved
        assert_eq!(ranked[1].0, "cv_a");
        assert_eq!(ranked[2].0, "cv_c");
    }

    #[test]
    fn test_rank_by_mean_when_no_algorithm_given() {
        let ranked = rank(&result_set(), None);
        assert_eq!(ranked[0], ("cv_b".to_string(), 100.0));
        assert_eq!(ranked[1].0, "cv_a");
        assert!((ranked[1].1 - 66.67).abs() < 1e-9);
    }

    #[test]
    fn test_rank_skips_documents_missing_the_algorithm() {
        let mut results = result_set();
        results.add_result("cv_d", run(Algorithm::RabinKarp, 33.33, 0.3, 500));
        let ranked = rank(&results, Some(Algorithm::RabinKarp));
        assert_eq!(ranked, vec![("cv_d".to_string(), 33.33)]);
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(1.0, 0.5), 2.0);
        assert_eq!(speedup(0.333, 0.111), 3.0);
        assert_eq!(speedup(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_efficiency() {
        assert_eq!(efficiency(250, 1000), 0.25);
        assert_eq!(efficiency(1, 3), 0.3333);
        assert_eq!(efficiency(100, 0), 0.0);
    }

    #[test]
    fn test_best_by_ties_keep_first() {
        let runs = vec![
            run(Algorithm::BruteForce, 66.67, 0.2, 300),
            run(Algorithm::RabinKarp, 66.67, 0.2, 300),
            run(Algorithm::Kmp, 66.67, 0.2, 300),
        ];
        assert_eq!(
            best_by(&runs, Criterion::Time).unwrap().algorithm,
            Algorithm::BruteForce
        );
        assert_eq!(
            best_by(&runs, Criterion::Score).unwrap().algorithm,
            Algorithm::BruteForce
        );
        assert!(best_by(&[], Criterion::Time).is_none());
    }

    #[test]
    fn test_summary() {
        let runs = vec![
            run(Algorithm::BruteForce, 66.67, 0.5, 300),
            run(Algorithm::RabinKarp, 66.67, 0.4, 450),
            run(Algorithm::Kmp, 66.67, 0.2, 120),
        ];
        let summary = summary(&runs).unwrap();
        assert_eq!(summary.total_algorithms, 3);
        assert_eq!(summary.total_time, 1.1);
        assert_eq!(summary.total_comparisons, 870);
        assert_eq!(summary.average_score, 66.67);
        assert_eq!(summary.fastest_algorithm, Algorithm::Kmp);
        assert_eq!(summary.most_efficient_algorithm, Algorithm::Kmp);
        assert_eq!(summary.highest_score_algorithm, Algorithm::BruteForce);
    }

    #[test]
    fn test_summary_empty_input() {
        assert!(summary(&[]).is_none());
    }
}
