use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::answers::AnswerSet;
use super::catalog::Candidate;
use super::engine::{AnswerValidation, Recommendation, RecommendationEngine, RecommendationError};
use crate::error::AppError;

/// Router builder exposing the questionnaire, catalog, and scoring endpoints.
pub fn advisor_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/candidates", get(candidates_handler))
        .route("/api/v1/candidates/:candidate_id", get(candidate_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub answers: AnswerSet,
    /// Overrides the engine's configured validation mode when present.
    #[serde(default)]
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub generated_at: DateTime<Utc>,
    pub complete: bool,
    pub missing_questions: Vec<&'static str>,
    pub recommendations: Vec<Recommendation>,
}

pub(crate) async fn questions_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Response {
    let questions = engine.questions().questions().to_vec();
    (StatusCode::OK, Json(questions)).into_response()
}

pub(crate) async fn candidates_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Response {
    let candidates = engine.catalog().candidates().to_vec();
    (StatusCode::OK, Json(candidates)).into_response()
}

pub(crate) async fn candidate_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    engine
        .catalog()
        .get(&candidate_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::UnknownCandidate(candidate_id))
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let RecommendationRequest { answers, strict } = request;
    let validation = strict
        .map(AnswerValidation::from_strict)
        .unwrap_or(engine.config().validation);

    let recommendations = engine
        .recommend_with(&answers, validation)
        .map_err(|err| {
            match &err {
                RecommendationError::InvalidAnswer(invalid) => {
                    warn!(error = %invalid, "rejected answer set")
                }
                other => error!(error = %other, "recommendation failed"),
            }
            err
        })?;

    let missing_questions = engine.missing_questions(&answers);
    Ok(Json(RecommendationResponse {
        generated_at: Utc::now(),
        complete: missing_questions.is_empty(),
        missing_questions,
        recommendations,
    }))
}
