//! Order form route configuration.

use crate::state::AppState;
use crate::web::handlers::submit_handler;
use axum::{Router, routing::post};

/// Order intake routes.
///
/// # Endpoints
///
/// - `POST /submit` - Validate, store and summarize an order
pub fn intake_routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit_handler))
}
