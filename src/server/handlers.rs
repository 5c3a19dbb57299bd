use crate::output::{write_csv, ExportError};
use crate::server::AppState;
use crate::SessionError;
use axum::extract::{Form, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

/// Parameters identifying the session a client believes is live
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlParams {
    pub text: String,
    pub num_letters: i64,
}

/// JSON error body with an HTTP status
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::InvalidArgument(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Number of letters must be 1 or 2")
            }
            SessionError::ParameterMismatch { .. } => {
                Self::new(StatusCode::CONFLICT, "Invalid request parameters")
            }
            SessionError::NotRunning | SessionError::InvalidState(_) => {
                Self::new(StatusCode::CONFLICT, error.to_string())
            }
            SessionError::OutOfRange { .. } => {
                tracing::error!("Engine desynchronized: {}", error);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::Empty => Self::new(StatusCode::NOT_FOUND, "No results to download"),
            other => {
                tracing::error!("Export failed: {}", other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        }
    }
}

pub(crate) async fn start(
    State(state): State<AppState>,
    Form(params): Form<CrawlParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let total = state.engine.start(&params.text, params.num_letters).await?;
    Ok(Json(json!({ "status": "started", "total": total })))
}

/// Advances one combination; a stopped session is reported, not failed
pub(crate) async fn fetch_suggestions(
    State(state): State<AppState>,
    Query(params): Query<CrawlParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.engine.advance(&params.text, params.num_letters).await {
        Ok(outcome) => Ok(Json(json!({
            "status": if outcome.complete { "complete" } else { "running" },
            "query": outcome.query_result.query,
            "suggestions": outcome.query_result.suggestions,
            "is_complete": outcome.complete,
            "progress": outcome.progress,
            "total": outcome.total,
        }))),
        Err(SessionError::NotRunning) => Ok(Json(json!({
            "status": "stopped",
            "suggestions": [],
            "is_complete": true,
        }))),
        Err(e) => Err(e.into()),
    }
}

pub(crate) async fn pause(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.engine.pause().await?;
    Ok(Json(json!({ "status": "paused" })))
}

pub(crate) async fn resume(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.engine.resume().await?;
    Ok(Json(json!({ "status": "resumed" })))
}

pub(crate) async fn cancel(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.engine.cancel().await;
    Json(json!({ "status": "cancelled" }))
}

pub(crate) async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.engine.snapshot().await)
}

/// Writes the export file and sends it back as an attachment
///
/// Answers 404 only while no combination has been processed.
pub(crate) async fn download(State(state): State<AppState>) -> Result<Response, ApiError> {
    let rows = state.engine.export_rows().await.ok_or(ExportError::Empty)?;

    let path = write_csv(
        &rows,
        Path::new(&state.export.directory),
        &state.export.file_prefix,
        chrono::Local::now(),
    )?;
    let body = tokio::fs::read(&path).await.map_err(ExportError::from)?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}
