// Service exports
pub mod analyzer;
pub mod ingest;
pub mod report;

pub use analyzer::{AnalyzerError, LinguisticAnalyzer, RuleAnalyzer, Token};
pub use ingest::{IngestError, JsonlIngestor, DEFAULT_DEDUP_WINDOW_SECS};
