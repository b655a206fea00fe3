use std::env;

use handles_policy::ReservedHandles;
use tracing::warn;

/// Reserved lists applied when RESERVED_HANDLES does not override them.
/// Same shape as the env var: a JSON object of domain -> local names.
const DEFAULT_RESERVED_HANDLES: &str = r#"{
    "army.social": [
        "charlesleclerc", "charles_leclerc", "leclerc", "16", "charles",
        "sedici", "natgracing", "natg", "ng", "cl"
    ]
}"#;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub cors_origins: Vec<String>,
    pub bluesky_api_url: Option<String>,
    pub reserved_handles: ReservedHandles,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/community_handles".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ]
            });

        let bluesky_api_url = env::var("BLUESKY_API_URL").ok();

        let mut reserved_handles = ReservedHandles::parse(DEFAULT_RESERVED_HANDLES)
            .expect("built-in reserved list must parse");
        if let Ok(raw) = env::var("RESERVED_HANDLES") {
            match ReservedHandles::parse(&raw) {
                Ok(extra) => reserved_handles.extend(extra),
                Err(e) => warn!(error = %e, "Ignoring invalid RESERVED_HANDLES"),
            }
        }

        Self {
            port,
            database_url,
            cors_origins,
            bluesky_api_url,
            reserved_handles,
        }
    }
}
