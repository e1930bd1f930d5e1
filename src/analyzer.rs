use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;

use crate::matcher::Matcher;
use crate::results::{round_dp, AnalysisResult};

/// Drives one matcher across a keyword list against a single document.
///
/// Stateless between invocations: `analyze` is a pure function of its inputs
/// apart from the wall-clock timing it records.
pub struct KeywordAnalyzer {
    matcher: Box<dyn Matcher>,
    case_sensitive: bool,
}

impl KeywordAnalyzer {
    /// Creates an analyzer around the given matcher
    pub fn new(matcher: Box<dyn Matcher>, case_sensitive: bool) -> Self {
        Self {
            matcher,
            case_sensitive,
        }
    }

    /// Searches every keyword in input order and folds the outcomes into one
    /// result record.
    ///
    /// A keyword with at least one occurrence is matched (its occurrence
    /// count is recorded), otherwise missing. The relevance score is the
    /// matched percentage rounded to 2 decimals, 0 when the keyword list is
    /// empty. Elapsed time covers the whole keyword loop, measured with a
    /// monotonic clock and reported in milliseconds at 3 decimals.
    pub fn analyze(&self, text: &str, keywords: &[String]) -> AnalysisResult {
        let start = Instant::now();

        let mut matched_keywords = Vec::new();
        let mut missing_keywords = Vec::new();
        let mut keyword_positions = BTreeMap::new();
        let mut comparisons = 0u64;

        for keyword in keywords {
            let outcome = self.matcher.search(text, keyword, self.case_sensitive);
            comparisons += outcome.comparisons;

            if outcome.offsets.is_empty() {
                missing_keywords.push(keyword.clone());
            } else {
                keyword_positions.insert(keyword.clone(), outcome.offsets.len() as u64);
                matched_keywords.push(keyword.clone());
            }
        }

        let execution_time = round_dp(start.elapsed().as_secs_f64() * 1000.0, 3);

        let total_keywords = keywords.len();
        let matches = matched_keywords.len();
        let relevance_score = if total_keywords == 0 {
            0.0
        } else {
            round_dp(matches as f64 / total_keywords as f64 * 100.0, 2)
        };

        debug!(
            algorithm = %self.matcher.algorithm(),
            matches,
            total_keywords,
            comparisons,
            "analyzed document"
        );

        AnalysisResult {
            algorithm: self.matcher.algorithm(),
            matched_keywords,
            missing_keywords,
            matches,
            total_keywords,
            relevance_score,
            comparisons,
            execution_time,
            keyword_positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{build_matcher, Algorithm};

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn analyzer(algorithm: Algorithm) -> KeywordAnalyzer {
        KeywordAnalyzer::new(build_matcher(algorithm, 101, 256).unwrap(), false)
    }

    const TEXT: &str = "Senior engineer with Python and SQL experience. \
                        Python used daily for data pipelines.";

    #[test]
    fn test_matched_and_missing_partition_keywords() {
        for algorithm in Algorithm::all() {
            let result = analyzer(algorithm).analyze(TEXT, &keywords(&["Python", "SQL", "Rust"]));

            assert_eq!(result.matched_keywords, vec!["Python", "SQL"]);
            assert_eq!(result.missing_keywords, vec!["Rust"]);
            assert_eq!(result.matches, 2);
            assert_eq!(result.total_keywords, 3);
            assert_eq!(result.relevance_score, 66.67);
            assert_eq!(result.keyword_positions.get("Python"), Some(&2));
            assert_eq!(result.keyword_positions.get("SQL"), Some(&1));
            assert_eq!(result.keyword_positions.get("Rust"), None);
        }
    }

    #[test]
    fn test_score_identical_across_algorithms_comparisons_differ() {
        let kws = keywords(&["Python", "SQL", "Rust"]);
        let results: Vec<_> = Algorithm::all()
            .iter()
            .map(|&a| analyzer(a).analyze(TEXT, &kws))
            .collect();

        for result in &results {
            assert_eq!(result.relevance_score, results[0].relevance_score);
        }
        // Brute force does strictly more character work than KMP here
        assert!(results[0].comparisons >= results[2].comparisons);
    }

    #[test]
    fn test_zero_keywords_scores_zero() {
        let result = analyzer(Algorithm::BruteForce).analyze(TEXT, &[]);
        assert_eq!(result.relevance_score, 0.0);
        assert_eq!(result.matches, 0);
        assert_eq!(result.total_keywords, 0);
        assert_eq!(result.comparisons, 0);
    }

    #[test]
    fn test_case_sensitivity() {
        let matcher = build_matcher(Algorithm::Kmp, 101, 256).unwrap();
        let sensitive = KeywordAnalyzer::new(matcher, true);
        let result = sensitive.analyze("python only, lowercase", &keywords(&["Python"]));
        assert_eq!(result.matched_keywords, Vec::<String>::new());
        assert_eq!(result.missing_keywords, vec!["Python"]);
    }

    #[test]
    fn test_comparisons_accumulate_across_keywords() {
        let single = analyzer(Algorithm::BruteForce).analyze(TEXT, &keywords(&["Python"]));
        let double = analyzer(Algorithm::BruteForce).analyze(TEXT, &keywords(&["Python", "Python"]));
        assert_eq!(double.comparisons, single.comparisons * 2);
    }
}
