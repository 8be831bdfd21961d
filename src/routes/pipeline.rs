use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Pipeline;
use crate::models::{ErrorResponse, HealthResponse, RunPipelineRequest, RunPipelineResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

/// Configure all pipeline-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/pipeline/run", web::post().to(run_pipeline));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Run the triage/extraction/matching pipeline over a batch of captured
/// messages.
///
/// POST /api/v1/pipeline/run
///
/// Request body:
/// ```json
/// {
///   "messages": [
///     { "author_name": "...", "author_phone": "...", "message": "..." }
///   ]
/// }
/// ```
async fn run_pipeline(
    state: web::Data<AppState>,
    req: web::Json<RunPipelineRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for run_pipeline request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Running pipeline over {} messages", req.messages.len());

    let outcome = state.pipeline.run(&req.messages);

    let response = RunPipelineResponse {
        run_id: uuid::Uuid::new_v4().to_string(),
        processed: outcome.processed,
        sellers: outcome.sellers.len(),
        buyers: outcome.buyers.len(),
        useless: outcome.useless,
        pairs_compared: outcome.pairs_compared,
        opportunities: outcome.opportunities,
        timestamp: chrono::Utc::now(),
    };

    tracing::info!(
        "Returning {} opportunities ({} sellers, {} buyers, {} useless)",
        response.opportunities.len(),
        response.sellers,
        response.buyers,
        response.useless
    );

    HttpResponse::Ok().json(response)
}
