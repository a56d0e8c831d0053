use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use super::domain::AnswerMap;
use super::service::AssessmentService;
use super::session::{SessionId, SessionStore};
use crate::error::AppError;

/// Router builder exposing the catalog, scoring, letter, and session endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler::<S>))
        .route("/api/v1/assessment/score", post(score_handler::<S>))
        .route("/api/v1/assessment/feedback", post(feedback_handler::<S>))
        .route(
            "/api/v1/assessment/sessions/:session_id",
            put(submit_handler::<S>),
        )
        .route(
            "/api/v1/assessment/sessions/:session_id/results",
            get(results_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn catalog_handler<S>(State(service): State<Arc<AssessmentService<S>>>) -> Response
where
    S: SessionStore + 'static,
{
    let catalog = service.catalog();
    let payload = json!({
        "dimensions": catalog.dimensions(),
        "answer_options": catalog.answer_options(),
        "total_questions": catalog.total_questions(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

/// Bodies that fail to parse, or are not a JSON object, are rejected with 400.
pub(crate) async fn score_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<AnswerMap>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: SessionStore + 'static,
{
    let Json(answers) = payload?;
    let outcome = service.evaluate(&answers)?;
    let payload = json!({
        "progress": outcome.progress,
        "scores": outcome.scores,
        "summary": outcome.summary,
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

pub(crate) async fn feedback_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<AnswerMap>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: SessionStore + 'static,
{
    let Json(answers) = payload?;
    let outcome = service.evaluate(&answers)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        outcome.letter.into_string(),
    )
        .into_response())
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
    payload: Result<Json<AnswerMap>, JsonRejection>,
) -> Result<Response, AppError>
where
    S: SessionStore + 'static,
{
    let Json(answers) = payload?;
    let session = SessionId(session_id);
    let progress = service.submit(session.clone(), answers)?;
    let payload = json!({
        "session_id": session,
        "progress": progress,
    });
    Ok((StatusCode::ACCEPTED, Json(payload)).into_response())
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Response, AppError>
where
    S: SessionStore + 'static,
{
    let outcome = service.results(&SessionId(session_id))?;
    Ok((StatusCode::OK, Json(outcome)).into_response())
}
