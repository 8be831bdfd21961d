use std::sync::Arc;

use crate::core::scoring::score_pair;
use crate::models::{MatchWeights, NormalizedAd, Opportunity};

/// Result of one matching pass.
#[derive(Debug)]
pub struct MatchResult {
    pub opportunities: Vec<Opportunity>,
    pub pairs_compared: usize,
}

/// Pairs buy-side requests with sell-side listings by attribute overlap.
///
/// The scan is a full cartesian product: every buyer is scored against every
/// seller, with no early termination. Scores are cheap to compute and the
/// qualifying set is expected to be small relative to the input.
#[derive(Debug, Clone)]
pub struct OpportunityMatcher {
    weights: MatchWeights,
}

impl OpportunityMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    /// Score every (buyer, seller) pair and keep the ones above the floor,
    /// sorted by score descending.
    pub fn find_opportunities(
        &self,
        buyers: &[Arc<NormalizedAd>],
        sellers: &[Arc<NormalizedAd>],
    ) -> MatchResult {
        let mut opportunities: Vec<Opportunity> = Vec::new();

        for buyer in buyers {
            for seller in sellers {
                let (score, matched_criteria) = score_pair(buyer, seller, &self.weights);

                if score > self.weights.min_score {
                    opportunities.push(Opportunity {
                        buyer: Arc::clone(buyer),
                        seller: Arc::clone(seller),
                        score,
                        matched_criteria,
                    });
                }
            }
        }

        opportunities.sort_by(|a, b| b.score.cmp(&a.score));

        MatchResult {
            opportunities,
            pairs_compared: buyers.len() * sellers.len(),
        }
    }
}

impl Default for OpportunityMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
