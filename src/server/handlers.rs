// Request handlers - routing, multipart intake and error-to-status mapping

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::AppServer;
use crate::analysis::{aggregate, build_prompt};
use crate::errors::Error;
use crate::gemini::GEMINI_MODEL;

pub fn create_router(state: Arc<AppServer>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/fetch-latest-logs", get(fetch_latest_logs))
        .route("/fetch-log", get(fetch_log))
        .route("/analyze", post(analyze))
        .with_state(state)
}

async fn health_check() -> String {
    format!("TraceToFix backend ({GEMINI_MODEL}) running")
}

/// Map a log-store failure to a `{message}` JSON response.
fn log_error_response(err: Error) -> Response {
    match err {
        Error::NotFound(message) => {
            (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
        }
        other => {
            tracing::error!("Log read error: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Error reading logs" })),
            )
                .into_response()
        }
    }
}

/// Map an analysis-pipeline failure to a `{result}` JSON response. The
/// inference diagnostic detail stays in the server log; the caller only
/// sees a generic failure message.
fn analyze_error_response(err: Error) -> Response {
    let (status, result) = match err {
        Error::EmptyInput => (
            StatusCode::BAD_REQUEST,
            "No logs or code provided for analysis".to_string(),
        ),
        Error::Configuration(detail) => {
            tracing::error!("Configuration error: {detail}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server misconfigured: {detail}"),
            )
        }
        other => {
            tracing::error!("AI error: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI analysis failed (see server logs for details)".to_string(),
            )
        }
    };

    (status, Json(json!({ "result": result }))).into_response()
}

async fn fetch_latest_logs(State(server): State<Arc<AppServer>>) -> Response {
    match server.log_store().latest() {
        Ok(log) => Json(json!({ "filename": log.filename, "logs": log.contents }))
            .into_response(),
        Err(err) => log_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct FetchLogParams {
    file: Option<String>,
}

async fn fetch_log(
    State(server): State<Arc<AppServer>>,
    Query(params): Query<FetchLogParams>,
) -> Response {
    let Some(file) = params.file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "File required" })),
        )
            .into_response();
    };

    match server.log_store().read(&file) {
        Ok(log) => Json(json!({ "logs": log.contents, "filename": log.filename }))
            .into_response(),
        Err(err) => log_error_response(err),
    }
}

/// Multipart intake: one optional `logs` text field plus any number of
/// uploaded file parts, kept in arrival order.
async fn read_multipart(multipart: &mut Multipart) -> Result<(Option<String>, Vec<Vec<u8>>), Response> {
    let mut typed: Option<String> = None;
    let mut files: Vec<Vec<u8>> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                tracing::warn!("Malformed multipart body: {err}");
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "result": "Malformed upload" })),
                )
                    .into_response());
            }
        };

        // Take an owned copy: reading the field body consumes it
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("logs") => match field.text().await {
                Ok(text) => typed = Some(text),
                Err(err) => {
                    tracing::warn!("Failed to read logs field: {err}");
                    return Err((
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "result": "Malformed upload" })),
                    )
                        .into_response());
                }
            },
            // The browser client posts uploads under "files"; accept the
            // bracketed spelling some form libraries emit too.
            Some("files") | Some("files[]") => match field.bytes().await {
                Ok(bytes) => files.push(bytes.to_vec()),
                Err(err) => {
                    tracing::warn!("Failed to read uploaded file: {err}");
                    return Err((
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "result": "Malformed upload" })),
                    )
                        .into_response());
                }
            },
            _ => {}
        }
    }

    Ok((typed, files))
}

/// The analysis pipeline: aggregate -> build prompt -> call Gemini ->
/// normalized text. Stages run strictly sequentially; the outbound call is
/// the only await point that leaves the process.
async fn analyze(State(server): State<Arc<AppServer>>, mut multipart: Multipart) -> Response {
    let (typed, files) = match read_multipart(&mut multipart).await {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let corpus = match aggregate(typed.as_deref(), &files) {
        Ok(corpus) => corpus,
        Err(err) => return analyze_error_response(err),
    };

    let prompt = build_prompt(&corpus);

    match server.gemini().analyze(&prompt).await {
        Ok(result) => Json(json!({ "result": result })).into_response(),
        Err(err) => analyze_error_response(err),
    }
}
