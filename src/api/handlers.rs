use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{HeuristicRecommendation, ProfileIntent, RepositoryFact, Suggestion};
use crate::services::{self, Analysis};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Omitted when no repository source was consulted
    #[serde(default)]
    pub repositories: Option<Vec<RepositoryFact>>,
    /// Reference time for recency rules; defaults to the time of the request
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// An advisory item the user approved for application
#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "snake_case")]
pub enum ApplyRequest {
    Suggestion(Suggestion),
    Recommendation(HeuristicRecommendation),
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get the current profile intent
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileIntent> {
    let inner = state.inner.read().await;
    Json(inner.intent.clone())
}

/// Replace the profile intent
///
/// Duplicate technologies and project names are merged before storing.
pub async fn replace_profile(
    State(state): State<AppState>,
    Json(intent): Json<ProfileIntent>,
) -> Json<ProfileIntent> {
    let mut inner = state.inner.write().await;
    inner.intent = intent.normalized();
    Json(inner.intent.clone())
}

/// Rank repositories and produce suggestions and recommendations
pub async fn analyze(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<Analysis>> {
    let now = request.now.unwrap_or_else(Utc::now);

    if let Some(repositories) = &request.repositories {
        if let Some(blank) = repositories.iter().position(|r| r.name.trim().is_empty()) {
            return Err(AppError::InvalidInput(format!(
                "repository at index {} has an empty name",
                blank
            )));
        }
    }

    tracing::info!(
        request_id = %request_id,
        repositories = ?request.repositories.as_ref().map(Vec::len),
        now = %now,
        "Processing analysis request"
    );

    let intent = state.inner.read().await.intent.clone();
    let analysis = services::analyze(request.repositories.as_deref(), &intent, now);

    Ok(Json(analysis))
}

/// Apply an approved suggestion or recommendation to the stored intent
pub async fn apply(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<ApplyRequest>,
) -> AppResult<Json<ProfileIntent>> {
    let mut inner = state.inner.write().await;
    let current = inner.intent.clone();

    let next = match &request {
        ApplyRequest::Suggestion(suggestion) => services::apply_suggestion(current, suggestion),
        ApplyRequest::Recommendation(recommendation) => {
            services::apply_recommendation(current, recommendation)
        }
    }
    .map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Advisory item rejected");
        AppError::from(e)
    })?;

    inner.intent = next;
    tracing::info!(request_id = %request_id, "Advisory item applied");

    Ok(Json(inner.intent.clone()))
}
