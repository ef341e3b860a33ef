//! Upload endpoints for the JSON test document shown in the summary panel

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Optional header carrying the percent-encoded client-side file name
pub const FILE_NAME_HEADER: &str = "x-file-name";

/// Metadata returned after a successful upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: Option<String>,
    pub size_bytes: usize,
    pub uploaded_at: i64,
}

/// Undo the page's `encodeURIComponent`; names that fail to decode are kept as sent
fn decode_file_name(encoded: &str) -> String {
    let encoded = encoded.trim();
    match urlencoding::decode(encoded) {
        Ok(name) => name.into_owned(),
        Err(e) => {
            log::warn!("Keeping undecodable file name {:?}: {}", encoded, e);
            encoded.to_string()
        }
    }
}

async fn upload_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadResponse>)> {
    let file_name = headers
        .get(FILE_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(decode_file_name)
        .filter(|name| !name.is_empty());

    let upload = state.uploads.put(file_name, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            file_name: upload.file_name,
            size_bytes: upload.raw.len(),
            uploaded_at: upload.uploaded_at,
        }),
    ))
}

/// Echo the uploaded document exactly as it was received
async fn get_upload(State(state): State<AppState>) -> Result<Response> {
    let upload = state
        .uploads
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No JSON file has been uploaded".to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], upload.raw).into_response())
}

async fn clear_upload(State(state): State<AppState>) -> StatusCode {
    state.uploads.clear().await;
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload_json).get(get_upload).delete(clear_upload),
    )
}
