use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::errors::{AnalyzeError, AnalyzeResult};
use crate::matcher::rabin_karp::{DEFAULT_PRIME, DEFAULT_RADIX};
use crate::matcher::Algorithm;

/// Configuration for a keyword analysis run.
///
/// Can be loaded from multiple locations in order of precedence:
/// 1. Custom config file passed to `load_from`
/// 2. Local `.keyscout.yaml` in the current directory
/// 3. Global `$HOME/.config/keyscout/config.yaml`
///
/// Example:
/// ```yaml
/// keywords:
///   - "Python"
///   - "SQL"
///   - "Rust"
/// case_sensitive: false
/// algorithms: ["brute-force", "rabin-karp", "kmp"]
/// hash_prime: 101
/// hash_radix: 256
/// thread_count: 4
/// log_level: "info"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerConfig {
    /// Keywords to screen documents against, in user-supplied order
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Whether matching distinguishes case (default: fold to lowercase)
    #[serde(default)]
    pub case_sensitive: bool,

    /// Algorithms to run against each document (default: all three)
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,

    /// Modulus for the Rabin-Karp rolling hash; must be at least 2 and
    /// should be prime
    #[serde(default = "default_hash_prime")]
    pub hash_prime: u64,

    /// Radix for the Rabin-Karp rolling hash; must be at least 2
    #[serde(default = "default_hash_radix")]
    pub hash_radix: u64,

    /// Number of threads for batch analysis
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::all().to_vec()
}

fn default_hash_prime() -> u64 {
    DEFAULT_PRIME
}

fn default_hash_radix() -> u64 {
    DEFAULT_RADIX
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            case_sensitive: false,
            algorithms: default_algorithms(),
            hash_prime: default_hash_prime(),
            hash_radix: default_hash_radix(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

impl AnalyzerConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("keyscout/config.yaml")),
            // Local config
            Some(PathBuf::from(".keyscout.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: AnalyzerConfig) -> Self {
        // CLI values take precedence over config file values
        if !cli_config.keywords.is_empty() {
            self.keywords = cli_config.keywords;
        }
        if cli_config.case_sensitive {
            self.case_sensitive = true;
        }
        if cli_config.algorithms != default_algorithms() {
            self.algorithms = cli_config.algorithms;
        }
        if cli_config.hash_prime != default_hash_prime() {
            self.hash_prime = cli_config.hash_prime;
        }
        if cli_config.hash_radix != default_hash_radix() {
            self.hash_radix = cli_config.hash_radix;
        }
        // Always use CLI thread count if specified
        self.thread_count = cli_config.thread_count;
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }

    /// Validates hash parameters; degenerate values are a fatal
    /// configuration error, not a searchable state
    pub fn validate(&self) -> AnalyzeResult<()> {
        if self.hash_prime < 2 || self.hash_radix < 2 {
            return Err(AnalyzeError::invalid_hash_params(
                self.hash_prime,
                self.hash_radix,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            keywords: ["Python", "SQL"]
            case_sensitive: true
            algorithms: ["kmp", "brute-force"]
            hash_prime: 131
            thread_count: 4
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = AnalyzerConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.keywords, vec!["Python", "SQL"]);
        assert!(config.case_sensitive);
        assert_eq!(config.algorithms, vec![Algorithm::Kmp, Algorithm::BruteForce]);
        assert_eq!(config.hash_prime, 131);
        assert_eq!(config.hash_radix, 256); // default
        assert_eq!(config.thread_count, NonZeroUsize::new(4).unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let config = AnalyzerConfig::default();
        assert!(config.keywords.is_empty());
        assert!(!config.case_sensitive);
        assert_eq!(config.algorithms, Algorithm::all().to_vec());
        assert_eq!(config.hash_prime, 101);
        assert_eq!(config.hash_radix, 256);
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_with_cli() {
        let config_file = AnalyzerConfig {
            keywords: vec!["Python".to_string()],
            case_sensitive: false,
            algorithms: vec![Algorithm::BruteForce],
            hash_prime: 131,
            hash_radix: 256,
            thread_count: NonZeroUsize::new(4).unwrap(),
            log_level: "warn".to_string(),
        };

        let cli_config = AnalyzerConfig {
            keywords: vec!["Rust".to_string()],
            case_sensitive: true,
            algorithms: Algorithm::all().to_vec(),
            hash_prime: 101,
            hash_radix: 256,
            thread_count: NonZeroUsize::new(8).unwrap(),
            log_level: "debug".to_string(),
        };

        let merged = config_file.merge_with_cli(cli_config);
        assert_eq!(merged.keywords, vec!["Rust"]); // CLI value
        assert!(merged.case_sensitive); // CLI value
        assert_eq!(merged.algorithms, vec![Algorithm::BruteForce]); // file value (CLI default)
        assert_eq!(merged.hash_prime, 131); // file value (CLI default)
        assert_eq!(merged.thread_count, NonZeroUsize::new(8).unwrap()); // CLI value
        assert_eq!(merged.log_level, "debug"); // CLI value
    }

    #[test]
    fn test_validate_rejects_degenerate_hash_params() {
        let config = AnalyzerConfig {
            hash_prime: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalyzerConfig {
            hash_radix: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_config() {
        let config_content = r#"
            keywords: 123  # Should be a list
            thread_count: "invalid"  # Should be a number
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let result = AnalyzerConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }
}
