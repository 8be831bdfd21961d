// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdIntent, ClassifiedMessage, Intent, MatchWeights, NormalizedAd, Opportunity, PropertyType,
    Range, RawMessage, SignalHit, UNKNOWN_CONTACT,
};
pub use requests::RunPipelineRequest;
pub use responses::{ErrorResponse, HealthResponse, RunPipelineResponse};
