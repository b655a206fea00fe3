use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

/// Stage-1 lookup: resolve the visitor's current handle to a profile card
pub async fn get_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Value>, AppError> {
    let handle = validation::normalize_source_handle(&handle);
    let profile = state.resolver.get_profile(&handle).await.map_err(|e| {
        debug!(handle = %handle, error = %e, "Profile lookup failed");
        AppError::NotFound("Handle not found - please try again".to_string())
    })?;

    Ok(Json(json!({ "profile": profile.as_ref() })))
}
