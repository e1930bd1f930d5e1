//! Exact string-matching algorithms behind a single polymorphic seam.
//!
//! Each matcher reports every occurrence of a pattern, including overlapping
//! ones, together with a count of the elementary comparisons it performed.
//! The comparison count is a relative cost metric: each algorithm defines its
//! own notion of a comparison (see the individual implementations), so counts
//! are comparable across runs of one algorithm, not across algorithms.

pub mod brute_force;
pub mod kmp;
pub mod rabin_karp;

pub use brute_force::BruteForce;
pub use kmp::Kmp;
pub use rabin_karp::RabinKarp;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::AnalyzeResult;

/// Identifies one of the three matching algorithms.
///
/// Serialized names match the labels used in exported result records; the
/// lowercase aliases are accepted in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Brute Force", alias = "brute-force")]
    BruteForce,
    #[serde(rename = "Rabin-Karp", alias = "rabin-karp")]
    RabinKarp,
    #[serde(rename = "KMP", alias = "kmp")]
    Kmp,
}

impl Algorithm {
    /// All algorithms in canonical order
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::BruteForce, Algorithm::RabinKarp, Algorithm::Kmp]
    }

    /// Human-readable name, as it appears in result records
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute Force",
            Algorithm::RabinKarp => "Rabin-Karp",
            Algorithm::Kmp => "KMP",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Offsets and cost of a single pattern search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Zero-based character offsets of every occurrence, ascending
    pub offsets: Vec<usize>,
    /// Elementary comparisons performed, per the algorithm's own definition
    pub comparisons: u64,
}

/// A single-pattern exact matcher.
///
/// Implementations are pure: the same inputs always produce the same offsets
/// and comparison count. An empty pattern, or a pattern longer than the text,
/// yields an empty outcome with zero comparisons rather than an error.
pub trait Matcher: Send + Sync {
    /// The algorithm this matcher implements
    fn algorithm(&self) -> Algorithm;

    /// Finds all (possibly overlapping) occurrences of `pattern` in `text`
    fn search(&self, text: &str, pattern: &str, case_sensitive: bool) -> MatchOutcome;
}

/// Builds the matcher for `algorithm`.
///
/// `prime` and `radix` parameterize the Rabin-Karp rolling hash and are
/// validated here; the other algorithms ignore them.
pub fn build_matcher(algorithm: Algorithm, prime: u64, radix: u64) -> AnalyzeResult<Box<dyn Matcher>> {
    Ok(match algorithm {
        Algorithm::BruteForce => Box::new(BruteForce),
        Algorithm::RabinKarp => Box::new(RabinKarp::new(prime, radix)?),
        Algorithm::Kmp => Box::new(Kmp),
    })
}

/// Folds text and pattern for comparison, collecting them into character
/// vectors so offsets count characters rather than bytes.
pub(crate) fn fold_chars(text: &str, pattern: &str, case_sensitive: bool) -> (Vec<char>, Vec<char>) {
    if case_sensitive {
        (text.chars().collect(), pattern.chars().collect())
    } else {
        (
            text.to_lowercase().chars().collect(),
            pattern.to_lowercase().chars().collect(),
        )
    }
}
