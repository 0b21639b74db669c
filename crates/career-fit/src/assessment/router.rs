use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::domain::AssessmentResponse;
use super::scoring::ScoringEngine;

/// Router builder exposing the question bank and the scoring engine over HTTP.
pub fn assessment_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/sections", get(sections_handler))
        .route("/api/v1/assessment/results", post(results_handler))
        .with_state(engine)
}

pub(crate) async fn questions_handler(State(engine): State<Arc<ScoringEngine>>) -> Response {
    let document = engine.bank().document();
    (StatusCode::OK, axum::Json(document)).into_response()
}

pub(crate) async fn sections_handler(State(engine): State<Arc<ScoringEngine>>) -> Response {
    let sections = engine.bank().sections();
    (StatusCode::OK, axum::Json(sections)).into_response()
}

pub(crate) async fn results_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(responses): axum::Json<Vec<AssessmentResponse>>,
) -> Response {
    let results = engine.compute(&responses);
    (StatusCode::OK, axum::Json(results)).into_response()
}
