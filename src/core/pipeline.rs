use std::sync::Arc;
use tracing::{debug, info};

use crate::core::extractor::AttributeExtractor;
use crate::core::matcher::OpportunityMatcher;
use crate::core::IntentClassifier;
use crate::models::{AdIntent, MatchWeights, NormalizedAd, Opportunity, RawMessage};
use crate::services::analyzer::LinguisticAnalyzer;

/// Everything one batch pass produced.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub processed: usize,
    pub useless: usize,
    pub buyers: Vec<Arc<NormalizedAd>>,
    pub sellers: Vec<Arc<NormalizedAd>>,
    pub opportunities: Vec<Opportunity>,
    pub pairs_compared: usize,
}

/// Single-pass batch pipeline: classify -> extract -> match.
///
/// Messages are processed record by record with no state shared across
/// records; a rerun over the same input recomputes everything from scratch.
pub struct Pipeline {
    classifier: IntentClassifier,
    extractor: AttributeExtractor,
    matcher: OpportunityMatcher,
}

impl Pipeline {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>, weights: MatchWeights) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            extractor: AttributeExtractor::new(analyzer),
            matcher: OpportunityMatcher::new(weights),
        }
    }

    /// Run the full pipeline over a finite, already-materialized batch.
    pub fn run(&self, messages: &[RawMessage]) -> PipelineOutcome {
        let mut buyers: Vec<Arc<NormalizedAd>> = Vec::new();
        let mut sellers: Vec<Arc<NormalizedAd>> = Vec::new();
        let mut useless = 0usize;

        for message in messages {
            let classified = self.classifier.classify(message);

            match classified.intent.as_ad_intent() {
                Some(intent) => {
                    let ad = Arc::new(self.extractor.extract(intent, &classified.message));
                    debug!(
                        intent = %classified.intent,
                        score = classified.score,
                        signals = classified.trace.len(),
                        "message normalized"
                    );

                    match intent {
                        AdIntent::Sell => sellers.push(ad),
                        AdIntent::Buy => buyers.push(ad),
                    }
                }
                None => useless += 1,
            }
        }

        let result = self.matcher.find_opportunities(&buyers, &sellers);

        info!(
            processed = messages.len(),
            sellers = sellers.len(),
            buyers = buyers.len(),
            useless,
            opportunities = result.opportunities.len(),
            "pipeline pass complete"
        );

        PipelineOutcome {
            processed: messages.len(),
            useless,
            buyers,
            sellers,
            opportunities: result.opportunities,
            pairs_compared: result.pairs_compared,
        }
    }
}
