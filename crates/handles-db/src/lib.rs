pub mod claims;
pub mod domains;
pub mod migrate;
pub mod types;

pub use sqlx::postgres::PgPool;
pub use types::*;
