use super::{fold_chars, Algorithm, MatchOutcome, Matcher};

/// Knuth-Morris-Pratt search.
///
/// A failure function (longest proper prefix that is also a suffix) is built
/// for the pattern in O(m); that preprocessing is not instrumented. The scan
/// phase counts one comparison per character test and never re-reads a text
/// character already consumed by the current match attempt, giving O(n + m)
/// worst-case behavior. After a full match the failure function restarts the
/// pattern cursor, so overlapping occurrences are found.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kmp;

/// Builds the longest-proper-prefix-suffix table for `pattern`
fn failure_function(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];
    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

impl Matcher for Kmp {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kmp
    }

    fn search(&self, text: &str, pattern: &str, case_sensitive: bool) -> MatchOutcome {
        let (text, pattern) = fold_chars(text, pattern, case_sensitive);
        let n = text.len();
        let m = pattern.len();

        let mut outcome = MatchOutcome::default();
        if m == 0 || m > n {
            return outcome;
        }

        let lps = failure_function(&pattern);

        let mut i = 0; // text cursor
        let mut j = 0; // pattern cursor

        while i < n {
            outcome.comparisons += 1;

            if text[i] == pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    outcome.offsets.push(i - j);
                    j = lps[j - 1];
                }
            } else if j != 0 {
                j = lps[j - 1];
            } else {
                i += 1;
            }
        }

        outcome
    }
}
