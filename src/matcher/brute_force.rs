use super::{fold_chars, Algorithm, MatchOutcome, Matcher};

/// Sliding-window character comparison, the O(n·m) worst-case baseline.
///
/// Every candidate start position is tried in turn; comparison stops at the
/// first mismatching character for that position. One comparison is counted
/// per character actually tested, so the count reflects the work done, not
/// the theoretical bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Matcher for BruteForce {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BruteForce
    }

    fn search(&self, text: &str, pattern: &str, case_sensitive: bool) -> MatchOutcome {
        let (text, pattern) = fold_chars(text, pattern, case_sensitive);
        let n = text.len();
        let m = pattern.len();

        let mut outcome = MatchOutcome::default();
        if m == 0 || m > n {
            return outcome;
        }

        for i in 0..=n - m {
            let mut j = 0;
            while j < m {
                outcome.comparisons += 1;
                if text[i + j] != pattern[j] {
                    break;
                }
                j += 1;
            }
            if j == m {
                outcome.offsets.push(i);
            }
        }

        outcome
    }
}
