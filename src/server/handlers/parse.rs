// src/server/handlers/parse.rs
//! Handwritten-name parse assist

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::name;
use crate::server::handlers::error_response;

/// Request body for name parsing
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// The raw handwritten name
    #[serde(default)]
    pub input: String,
}

/// Response carrying the normalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a handwritten recipe name
///
/// POST /parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match name::normalize(&request.input) {
        Some(msg) => Json(ParseResponse { msg }).into_response(),
        None => error_response(&Error::InvalidInput("Invalid recipe name".to_string())),
    }
}
