use super::{fold_chars, Algorithm, MatchOutcome, Matcher};
use crate::errors::{AnalyzeError, AnalyzeResult};

/// Default modulus for the rolling hash
pub const DEFAULT_PRIME: u64 = 101;

/// Default radix for the rolling hash (extended ASCII alphabet size)
pub const DEFAULT_RADIX: u64 = 256;

/// Rabin-Karp rolling-hash search.
///
/// The pattern and each text window are hashed as base-`radix` polynomials
/// over character ordinals, modulo `prime`. Every window slide counts as one
/// comparison (the hash check); when hashes collide, an authoritative
/// character-by-character verification runs and each of its character tests
/// is counted individually. Correctness never depends on the hash.
///
/// Because the count mixes hash checks and verification characters, it is not
/// directly comparable in magnitude to the counts reported by the other
/// algorithms. That is deliberate instrumentation behavior, kept as-is so
/// comparison tables stay faithful to what each algorithm actually did.
#[derive(Debug, Clone, Copy)]
pub struct RabinKarp {
    prime: u64,
    radix: u64,
}

impl RabinKarp {
    /// Creates a matcher with the given hash modulus and radix.
    ///
    /// A modulus or radix below 2 degenerates the hash and is rejected as a
    /// configuration error.
    pub fn new(prime: u64, radix: u64) -> AnalyzeResult<Self> {
        if prime < 2 || radix < 2 {
            return Err(AnalyzeError::invalid_hash_params(prime, radix));
        }
        Ok(Self { prime, radix })
    }

    // Modular helpers run in u128 so any 64-bit prime is usable
    fn mulmod(&self, a: u64, b: u64) -> u64 {
        (a as u128 * b as u128 % self.prime as u128) as u64
    }

    fn addmod(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.prime as u128) as u64
    }

    /// Hash step: `radix * acc + ord` mod prime
    fn push(&self, acc: u64, c: char) -> u64 {
        self.addmod(self.mulmod(self.radix, acc), c as u64 % self.prime)
    }
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self {
            prime: DEFAULT_PRIME,
            radix: DEFAULT_RADIX,
        }
    }
}

impl Matcher for RabinKarp {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RabinKarp
    }

    fn search(&self, text: &str, pattern: &str, case_sensitive: bool) -> MatchOutcome {
        let (text, pattern) = fold_chars(text, pattern, case_sensitive);
        let n = text.len();
        let m = pattern.len();

        let mut outcome = MatchOutcome::default();
        if m == 0 || m > n {
            return outcome;
        }

        let q = self.prime;

        // h = radix^(m-1) mod q, the weight of the outgoing character
        let mut h = 1u64;
        for _ in 0..m - 1 {
            h = self.mulmod(h, self.radix);
        }

        let mut pattern_hash = 0u64;
        let mut window_hash = 0u64;
        for i in 0..m {
            pattern_hash = self.push(pattern_hash, pattern[i]);
            window_hash = self.push(window_hash, text[i]);
        }

        for i in 0..=n - m {
            // The hash check itself counts as one comparison
            outcome.comparisons += 1;

            if pattern_hash == window_hash {
                let mut matched = true;
                for j in 0..m {
                    outcome.comparisons += 1;
                    if text[i + j] != pattern[j] {
                        matched = false;
                        break;
                    }
                }
                if matched {
                    outcome.offsets.push(i);
                }
            }

            if i < n - m {
                // Roll: drop the outgoing character, append the incoming one.
                // Adding q before the subtraction keeps the value non-negative.
                let outgoing = self.mulmod(text[i] as u64 % q, h);
                let stripped = self.addmod(window_hash, q - outgoing);
                window_hash = self.push(stripped, text[i + m]);
            }
        }

        outcome
    }
}
