//! Diagram decode endpoint.

use axum::Json;
use diagram::DiagramPage;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct DecodeRequest {
    /// Raw `.drawio` file content, compressed or not.
    pub content: String,
}

#[derive(Serialize)]
pub struct DecodeResponse {
    pub pages: Vec<DiagramPage>,
}

/// POST /{extension-name}/diagram — decodes Draw.io file content into its
/// mxGraphModel pages.
#[tracing::instrument(skip(req))]
pub async fn decode(Json(req): Json<DecodeRequest>) -> Result<Json<DecodeResponse>, ApiError> {
    metrics::counter!("diagram_decode_total").increment(1);

    let pages = diagram::extract_pages(&req.content).map_err(|err| {
        metrics::counter!("diagram_decode_failed_total").increment(1);
        tracing::warn!(error = %err, "diagram decode failed");
        ApiError::from(err)
    })?;

    Ok(Json(DecodeResponse { pages }))
}
