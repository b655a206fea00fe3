use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Domain row returned from SELECT queries
#[derive(Debug, Clone, FromRow)]
pub struct DomainRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Handle claim row returned from INSERT ... RETURNING
#[derive(Debug, Clone, FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub domain_id: i64,
    pub handle: String,
    pub did: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for inserting a new claim
#[derive(Debug, Clone)]
pub struct CreateClaimParams {
    pub domain_id: i64,
    pub handle: String,
    pub did: String,
}
