//! Greeting endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HelloResponse {
    pub data: String,
}

/// GET /{extension-name}/hello — returns the fixed greeting.
///
/// Stateless and idempotent: every call yields a byte-identical response.
#[tracing::instrument(skip(state))]
pub async fn get(State(state): State<Arc<AppState>>) -> Json<HelloResponse> {
    metrics::counter!("hello_requests_total").increment(1);
    Json(HelloResponse {
        data: state.greeting.clone(),
    })
}
