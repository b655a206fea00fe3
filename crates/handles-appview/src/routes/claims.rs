use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use ts_rs::TS;

use crate::claim::{self, ClaimError, ClaimStatus, PgClaimStore};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ClaimRequest {
    domain: String,
    handle: String,
    /// Absent on a stage-1 (resolve-only) submission
    new_handle: Option<String>,
}

/// Run the claim pipeline, or only stage-1 resolution when no new handle was
/// submitted yet
pub async fn create_claim(
    State(state): State<AppState>,
    Json(body): Json<ClaimRequest>,
) -> Result<Json<Value>, ClaimError> {
    if body.domain.trim().is_empty() {
        return Err(ClaimError::InvalidHandle);
    }

    let desired = body.new_handle.as_deref().unwrap_or("").trim();
    if desired.is_empty() {
        let profile = claim::resolve_source(state.resolver.as_ref(), &body.handle).await?;
        return Ok(Json(json!({
            "profile": profile.as_ref(),
            "outcome": Value::Null,
        })));
    }

    let store = PgClaimStore::new(state.pool.clone());
    let outcome = claim::claim_handle(
        state.resolver.as_ref(),
        &store,
        &state.reserved,
        &body.domain,
        &body.handle,
        desired,
    )
    .await?;

    let status = match outcome.status {
        ClaimStatus::Created => "created",
        ClaimStatus::AlreadyOwned => "alreadyOwned",
    };

    Ok(Json(json!({
        "profile": outcome.profile.as_ref(),
        "outcome": { "handle": outcome.handle, "status": status },
    })))
}

/// Read side for the domain-verification flow: the DID recorded for a claim
pub async fn get_claim(
    State(state): State<AppState>,
    Path((domain, handle)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let handle = handle.to_lowercase();
    let did = handles_db::claims::find_did(&state.pool, &domain, &handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))?;

    Ok(Json(json!({ "did": did })))
}
