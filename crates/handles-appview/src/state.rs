use std::sync::Arc;

use atproto_identity::IdentityResolver;
use handles_policy::ReservedHandles;
use sqlx::postgres::PgPool;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub resolver: Arc<IdentityResolver>,
    pub reserved: Arc<ReservedHandles>,
}
