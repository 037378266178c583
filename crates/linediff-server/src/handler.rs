use axum::extract::rejection::JsonRejection;
use axum::response::Json;

use linediff_core::LineDiff;
use linediff_protocol::{DiffRequest, DiffResponse, HealthResponse};

use crate::error::{ServerError, ServerResult};

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Line diff handler: `{"text1", "text2"}` in, `{"diffs": [...]}` out.
pub async fn diffs_handler(
    payload: Result<Json<DiffRequest>, JsonRejection>,
) -> ServerResult<Json<DiffResponse>> {
    let Json(request) = payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let (text1, text2) = request.into_texts()?;

    // Large inputs are quadratic in the worst case; keep them off the executor.
    let diff = tokio::task::spawn_blocking(move || LineDiff::new(&text1, &text2))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    for op in diff.opcodes() {
        tracing::trace!(tag = %op.tag, i1 = op.i1, i2 = op.i2, j1 = op.j1, j2 = op.j2, "opcode");
    }
    let stats = diff.stats();
    tracing::debug!(
        old_lines = diff.old_lines().len(),
        new_lines = diff.new_lines().len(),
        opcodes = diff.opcodes().len(),
        additions = stats.additions(),
        deletions = stats.deletions(),
        "computed line diff"
    );

    Ok(Json(DiffResponse::new(diff.records())))
}
