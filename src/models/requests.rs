use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::RawMessage;

/// Request to run the triage/extraction/matching pipeline over a batch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RunPipelineRequest {
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: Vec<RawMessage>,
}
