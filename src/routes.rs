//! Top-level router configuration combining the form, API and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`         - Order form (static `index.html`)
//! - `POST /submit`   - Order submission, renders the summary page
//! - `GET  /health`   - Health check: database
//! - `GET  /menu`     - Catalog as JSON
//! - `/static/*`      - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500 Internal Server Error`
//! - **Rate limiting** - Per-IP token bucket on `/submit`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{catch_panic, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding `index.html` and other assets
pub fn app_router(state: AppState, static_dir: &Path) -> NormalizePath<Router> {
    let intake_router = web::routes::intake_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .merge(intake_router)
        .merge(api::routes::public_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(catch_panic::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
