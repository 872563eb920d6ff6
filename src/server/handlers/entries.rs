// src/server/handlers/entries.rs
//! Cookbook entry creation

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cookbook::Entry;
use crate::error::Error;
use crate::server::ServerState;
use crate::server::handlers::error_response;

/// Add an entry to the cookbook
///
/// POST /entry
///
/// The body is a tagged entry payload; the tag must be exactly
/// `"ingredient"` or `"recipe"`. Malformed bodies (including an unknown
/// tag) are rejected as invalid input before touching the store.
pub async fn create_entry(
    State(state): State<Arc<RwLock<ServerState>>>,
    payload: Result<Json<Entry>, JsonRejection>,
) -> Response {
    let Json(entry) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(&Error::InvalidInput(rejection.body_text()));
        }
    };

    let type_tag = entry.type_tag();
    let name = entry.name().to_string();

    let mut state = state.write().await;
    match state.cookbook.insert(entry) {
        Ok(()) => {
            info!("Created {} '{}'", type_tag, name);
            Json(serde_json::json!({})).into_response()
        }
        Err(err) => {
            warn!("Rejected {} '{}': {}", type_tag, name, err);
            error_response(&err)
        }
    }
}
