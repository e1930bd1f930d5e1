pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod engine;
pub mod errors;
pub mod export;
pub mod keywords;
pub mod matcher;
pub mod results;

pub use analyzer::KeywordAnalyzer;
pub use config::AnalyzerConfig;
pub use engine::{analyze_documents, Document};
pub use errors::{AnalyzeError, AnalyzeResult};
pub use matcher::{Algorithm, MatchOutcome, Matcher};
pub use results::{AnalysisResult, DocumentResults};
