//! Rate limiting middleware using token bucket algorithm.

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer, governor::GovernorConfigBuilder,
    key_extractor::PeerIpKeyExtractor,
};

use crate::error::AppError;

/// Creates a rate limiter for order submission.
///
/// # Limits
///
/// - **Replenish**: one request every 2 seconds
/// - **Burst**: 20 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Any other
/// limiter failure, such as a missing peer address, is answered like every
/// other unexpected fault: `500 Internal Server Error`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/submit", post(submit_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(20)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf).error_handler(handle_governor_error)
}

fn handle_governor_error(error: GovernorError) -> Response<Body> {
    match error {
        GovernorError::TooManyRequests { .. } => {
            tracing::warn!("Order submission rate limited: {}", error);
            error.into_response().map(Body::from)
        }
        GovernorError::UnableToExtractKey => {
            AppError::internal("rate limiter could not determine the client address")
                .into_response()
        }
        GovernorError::Other { .. } => {
            AppError::internal(format!("rate limiter failed: {error}")).into_response()
        }
    }
}
