use serde::{Deserialize, Serialize};

use crate::models::domain::Opportunity;

/// Response for the pipeline run endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPipelineResponse {
    pub run_id: String,
    pub processed: usize,
    pub sellers: usize,
    pub buyers: usize,
    pub useless: usize,
    pub pairs_compared: usize,
    pub opportunities: Vec<Opportunity>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
