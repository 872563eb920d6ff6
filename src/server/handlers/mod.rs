// src/server/handlers/mod.rs
//! HTTP request handlers for the Gusteau server

pub mod entries;
pub mod parse;
pub mod summary;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::Error;

/// Render a domain error as the wire error shape.
///
/// Every validation failure is a 400 with `{"error": <message>}`; the
/// message always identifies the offending name.
pub(crate) fn error_response(err: &Error) -> Response {
    let body = serde_json::json!({ "error": err.to_string() });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
