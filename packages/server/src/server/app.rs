//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::listings::ListingQueries;
use crate::server::routes::{
    get_hotel_handler, health_handler, list_hotels_handler, root_handler, stats_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub listings: ListingQueries,
    pub app_name: Arc<str>,
    /// Deadline for the `/health` database round trip
    pub db_probe_timeout: Duration,
}

/// Build the Axum application router
///
/// The pool is owned by the caller, which is also responsible for closing it
/// once the server has shut down.
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let app_state = AxumAppState {
        db_pool: pool.clone(),
        listings: ListingQueries::new(pool),
        app_name: Arc::from(config.app_name.as_str()),
        db_probe_timeout: config.db_acquire_timeout,
    };

    let listing_routes = Router::new()
        .route("/hotels", get(list_hotels_handler))
        .route("/hotels/:id", get(get_hotel_handler))
        .route("/stats", get(stats_handler));

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler));

    let router = if config.api_prefix.is_empty() {
        router.merge(listing_routes)
    } else {
        router.nest(&config.api_prefix, listing_routes)
    };

    router
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
