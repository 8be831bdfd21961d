//! Sentinela Intel - lead-matching service for real-estate broker chats
//!
//! This library triages captured group messages into selling/buying/useless,
//! extracts structured listing attributes from the useful ones, and pairs
//! buy-side requests with sell-side listings by scoring attribute overlap.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize, IntentClassifier, OpportunityMatcher, Pipeline, PipelineOutcome};
pub use crate::models::{
    AdIntent, ClassifiedMessage, Intent, MatchWeights, NormalizedAd, Opportunity, Range,
    RawMessage,
};
pub use crate::services::{JsonlIngestor, LinguisticAnalyzer, RuleAnalyzer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let text = normalize("  *Vendo* Casa  ");
        assert_eq!(text, "vendo casa");
    }
}
