//! JSON API route configuration.

use crate::api::handlers::{health_handler, menu_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public JSON routes.
///
/// # Endpoints
///
/// - `GET /health` - Service health with database check
/// - `GET /menu`   - Catalog items and unit prices
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/menu", get(menu_handler))
}
