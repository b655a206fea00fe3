mod claim;
mod config;
mod error;
mod routes;
mod state;
mod validation;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use atproto_identity::IdentityResolver;
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handles_appview=info".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    info!(port = config.port, "Starting handles-appview");

    // Connect to database
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    handles_db::migrate::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    let resolver = match config.bluesky_api_url.as_deref() {
        Some(url) => IdentityResolver::with_service_url(url),
        None => IdentityResolver::new(),
    };

    let state = AppState {
        pool,
        resolver: Arc::new(resolver),
        reserved: Arc::new(config.reserved_handles.clone()),
    };

    // CORS
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health))
        // Profiles (stage-1 resolution)
        .route("/api/profiles/{handle}", get(routes::profiles::get_profile))
        // Claims
        .route("/api/claims", post(routes::claims::create_claim))
        .route(
            "/api/claims/{domain}/{handle}",
            get(routes::claims::get_claim),
        )
        .layer(cors)
        .with_state(state);

    // Serve the SPA with fallback to index.html for client-side routing
    let public_path = std::env::var("PUBLIC_PATH").unwrap_or_else(|_| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .join("../../dist/public")
            .canonicalize()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| "dist/public".to_string())
    });

    info!(public_path = %public_path, "Serving static files");

    let spa_fallback =
        ServeDir::new(&public_path).fallback(ServeFile::new(format!("{}/index.html", public_path)));

    let app = app.fallback_service(spa_fallback);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}
