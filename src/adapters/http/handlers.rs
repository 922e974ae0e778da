//! HTTP handlers for the gateway routes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::SharedState;
use crate::domain::OrganAssessment;

const SERVICE_NAME: &str = "UltraViab API";

/// GET / - liveness check
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": format!("{SERVICE_NAME} is running") }))
}

/// GET /health - detailed health check
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /predict - score one organ assessment
pub async fn predict(
    State(state): State<SharedState>,
    Json(assessment): Json<OrganAssessment>,
) -> Result<impl IntoResponse, ApiError> {
    assessment.validate().map_err(ApiError::Validation)?;

    let result = state.scorer.score(&assessment);

    tracing::info!(
        organ_type = %assessment.organ_type,
        score = result.viability_score,
        classification = %result.classification,
        risk_factors = result.risk_factors.len(),
        "prediction served"
    );

    Ok(Json(result))
}
