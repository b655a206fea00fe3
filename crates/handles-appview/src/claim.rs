use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use atproto_identity::{IdentityResolver, Profile, ResolveError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use handles_db::types::CreateClaimParams;
use handles_policy::{has_explicit_slur, ReservedHandles};
use serde_json::json;
use sqlx::postgres::PgPool;
use tracing::{info, warn};

use crate::validation;

/// Directory lookup resolving a handle to a profile (DID + canonical handle)
#[async_trait]
pub trait Directory: Send + Sync {
    async fn resolve(&self, handle: &str) -> Result<Arc<Profile>, ResolveError>;
}

#[async_trait]
impl Directory for IdentityResolver {
    async fn resolve(&self, handle: &str) -> Result<Arc<Profile>, ResolveError> {
        self.get_profile(handle).await
    }
}

/// Storage failures as seen by the pipeline. `Conflict` is the uniqueness
/// constraint rejecting a concurrent first-time claim for the same name.
#[derive(Debug)]
pub enum StoreError {
    Conflict,
    Unavailable(String),
}

/// Claim storage keyed by (domain name, local name)
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// The DID recorded for a local name, if any
    async fn find_claim(&self, domain: &str, handle: &str) -> Result<Option<String>, StoreError>;

    /// Record a claim, creating the domain row if needed
    async fn insert_claim(&self, domain: &str, handle: &str, did: &str) -> Result<(), StoreError>;
}

/// ClaimStore backed by Postgres via handles-db
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn find_claim(&self, domain: &str, handle: &str) -> Result<Option<String>, StoreError> {
        handles_db::claims::find_did(&self.pool, domain, handle)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn insert_claim(&self, domain: &str, handle: &str, did: &str) -> Result<(), StoreError> {
        let domain_row = handles_db::domains::get_or_create(&self.pool, domain)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let params = CreateClaimParams {
            domain_id: domain_row.id,
            handle: handle.to_string(),
            did: did.to_string(),
        };
        match handles_db::claims::create(&self.pool, &params).await {
            Ok(_) => Ok(()),
            Err(e) if handles_db::claims::is_unique_violation(&e) => Err(StoreError::Conflict),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }
}

/// Failure categories of the claim pipeline. `InvalidHandle` and
/// `PolicyViolation` surface with the same message; the distinction exists
/// only for logging.
#[derive(Debug)]
pub enum ClaimError {
    AccountNotFound,
    InvalidHandle,
    PolicyViolation,
    Reserved,
    HandleTaken,
    ClaimFailed(String),
}

impl ClaimError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ClaimError::AccountNotFound => "Handle not found - please try again",
            ClaimError::InvalidHandle | ClaimError::PolicyViolation => {
                "Invalid handle - please enter a different handle"
            }
            ClaimError::Reserved => "Reserved handle - please enter a different handle",
            ClaimError::HandleTaken => "Handle already taken - please enter a different handle",
            ClaimError::ClaimFailed(_) => "An error occurred - please try again",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ClaimError::AccountNotFound => StatusCode::NOT_FOUND,
            ClaimError::InvalidHandle | ClaimError::PolicyViolation | ClaimError::Reserved => {
                StatusCode::BAD_REQUEST
            }
            ClaimError::HandleTaken => StatusCode::CONFLICT,
            ClaimError::ClaimFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimError::AccountNotFound => write!(f, "account not found"),
            ClaimError::InvalidHandle => write!(f, "invalid handle"),
            ClaimError::PolicyViolation => write!(f, "policy violation"),
            ClaimError::Reserved => write!(f, "reserved handle"),
            ClaimError::HandleTaken => write!(f, "handle taken"),
            ClaimError::ClaimFailed(msg) => write!(f, "claim failed: {}", msg),
        }
    }
}

impl IntoResponse for ClaimError {
    fn into_response(self) -> Response {
        match &self {
            ClaimError::PolicyViolation => info!("Rejected candidate handle: policy violation"),
            ClaimError::ClaimFailed(cause) => tracing::error!(error = %cause, "Claim failed"),
            _ => {}
        }
        let body = axum::Json(json!({ "error": self.user_message() }));
        (self.status(), body).into_response()
    }
}

/// How an accepted claim was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    /// A new claim row was written
    Created,
    /// The name was already claimed by the same account
    AlreadyOwned,
}

/// Successful pipeline result
#[derive(Debug)]
pub struct ClaimOutcome {
    pub profile: Arc<Profile>,
    pub handle: String,
    pub status: ClaimStatus,
}

/// Resolve the visitor's source account, applying the `.bsky.social` default
/// for bare names. Shared by the pipeline and resolve-only requests.
pub async fn resolve_source(
    directory: &dyn Directory,
    source_handle: &str,
) -> Result<Arc<Profile>, ClaimError> {
    let source = validation::normalize_source_handle(source_handle);
    directory.resolve(&source).await.map_err(|e| {
        warn!(handle = %source, error = %e, "Source handle resolution failed");
        ClaimError::AccountNotFound
    })
}

/// Run the handle claim pipeline: resolve the source account, validate the
/// candidate, resolve conflicts, persist. Single attempt throughout; the
/// first failure short-circuits.
pub async fn claim_handle(
    directory: &dyn Directory,
    store: &dyn ClaimStore,
    reserved: &ReservedHandles,
    domain: &str,
    source_handle: &str,
    desired: &str,
) -> Result<ClaimOutcome, ClaimError> {
    let profile = resolve_source(directory, source_handle).await?;

    let candidate = validation::normalize_candidate(desired, domain);
    let local = validation::local_name(&candidate, domain).ok_or(ClaimError::InvalidHandle)?;

    if has_explicit_slur(local) {
        return Err(ClaimError::PolicyViolation);
    }

    if reserved.is_reserved(domain, local) {
        return Err(ClaimError::Reserved);
    }

    let existing = store.find_claim(domain, local).await.map_err(|e| match e {
        StoreError::Conflict => ClaimError::HandleTaken,
        StoreError::Unavailable(msg) => ClaimError::ClaimFailed(msg),
    })?;

    let status = match existing {
        Some(ref did) if *did == profile.did => ClaimStatus::AlreadyOwned,
        Some(_) => return Err(ClaimError::HandleTaken),
        None => {
            store
                .insert_claim(domain, local, &profile.did)
                .await
                .map_err(|e| match e {
                    // check-then-act race: a concurrent claimant won the insert
                    StoreError::Conflict => ClaimError::HandleTaken,
                    StoreError::Unavailable(msg) => ClaimError::ClaimFailed(msg),
                })?;
            info!(domain, handle = %local, did = %profile.did, "Created handle claim");
            ClaimStatus::Created
        }
    };

    Ok(ClaimOutcome {
        profile,
        handle: candidate,
        status,
    })
}
