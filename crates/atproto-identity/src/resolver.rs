use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use tracing::debug;

use crate::error::ResolveError;
use crate::types::{Profile, ProfileResponse};

const DEFAULT_SERVICE_URL: &str = "https://public.api.bsky.app";
const CACHE_TTL_SECS: u64 = 300; // 5 minutes

/// Fetches Bluesky profiles by handle or DID
pub struct IdentityResolver {
    client: Client,
    service_url: String,
    profile_cache: Cache<String, Arc<Profile>>,
}

impl IdentityResolver {
    /// Create a new resolver with default settings
    pub fn new() -> Self {
        Self::with_service_url(DEFAULT_SERVICE_URL)
    }

    /// Create a new resolver with a custom Bluesky API URL
    pub fn with_service_url(service_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let profile_cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
            .build();

        Self {
            client,
            service_url: service_url.trim_end_matches('/').to_string(),
            profile_cache,
        }
    }

    /// Fetch a profile by handle or DID
    pub async fn get_profile(&self, actor: &str) -> Result<Arc<Profile>, ResolveError> {
        if let Some(cached) = self.profile_cache.get(actor).await {
            return Ok(cached);
        }

        let url = format!(
            "{}/xrpc/app.bsky.actor.getProfile?actor={}",
            self.service_url,
            urlencoding::encode(actor)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            debug!(actor, status = %response.status(), "Failed to fetch profile");
            return Err(ResolveError::Status(response.status().as_u16()));
        }

        let data: ProfileResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::Malformed(e.to_string()))?;

        let profile = Arc::new(Profile::from(data));

        // Cache by both DID and handle
        self.profile_cache
            .insert(profile.did.clone(), profile.clone())
            .await;
        self.profile_cache
            .insert(profile.handle.clone(), profile.clone())
            .await;

        Ok(profile)
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}
