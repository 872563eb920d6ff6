// src/server/handlers/summary.rs
//! Recipe summary endpoint

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::warn;

use crate::resolver::Resolver;
use crate::server::ServerState;
use crate::server::handlers::error_response;

/// Query parameters for summary requests
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Name of the recipe to resolve
    pub name: String,
}

/// Resolve a recipe into total cook time and flattened base ingredients
///
/// GET /summary?name=<recipe>
pub async fn get_summary(
    State(state): State<Arc<RwLock<ServerState>>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let state = state.read().await;

    match Resolver::new(&state.cookbook).summarize(&query.name) {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            warn!("Summary for '{}' failed: {}", query.name, err);
            error_response(&err)
        }
    }
}
