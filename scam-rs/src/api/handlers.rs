//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info_span, warn};
use uuid::Uuid;

use crate::analysis::{error_message, AnalysisResponse, Analyzer, ErrorResponse, Prediction};
use crate::error::ScamError;

/// Shared application state
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Analysis request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Message text; anything other than a string counts as missing
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    /// Caller-supplied hint ("sms", "email", ...), logged only
    #[serde(default)]
    pub message_type: Option<String>,
}

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP status for a failed analysis
pub fn status_for(error: &ScamError) -> StatusCode {
    match error {
        ScamError::EmptyContent => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn rejection_response(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    let error = ScamError::Analysis(rejection.body_text());
    warn!("Rejected request body: {}", error);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error.to_string())))
}

/// Full risk analysis
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            let (status, Json(body)) = rejection_response(rejection);
            return (status, Json(AnalysisResponse::Error(body)));
        }
    };

    let request_id = Uuid::new_v4();
    let message_type = request.message_type.as_deref().unwrap_or("general");
    let content = request
        .content
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();

    info_span!("analyze", %request_id, message_type).in_scope(|| {
        match state.analyzer.analyze(content) {
            Ok(result) => (StatusCode::OK, Json(AnalysisResponse::Analysis(Box::new(result)))),
            Err(e) => {
                let message = error_message(&e);
                warn!("Analysis request failed: {}", message);
                (status_for(&e), Json(AnalysisResponse::Error(ErrorResponse::new(message))))
            }
        }
    })
}

/// Classifier-only prediction
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<Prediction>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(rejection_response)?;

    let request_id = Uuid::new_v4();
    let message = request.message.unwrap_or_default();

    info_span!("predict", %request_id).in_scope(|| {
        state.analyzer.predict(&message).map(Json).map_err(|e| {
            let message = error_message(&e);
            warn!("Prediction request failed: {}", message);
            (status_for(&e), Json(ErrorResponse::new(message)))
        })
    })
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let classifier = state.analyzer.classifier();
    Json(serde_json::json!({
        "status": "healthy",
        "model": classifier.model_name(),
        "labels": classifier.labels(),
    }))
}
