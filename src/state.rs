//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::intake::IntakePipeline;
use crate::application::services::OrderService;

/// State shared by all request handlers.
///
/// Cheap to clone: the pipeline is `Copy` over a static catalog and the
/// service sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub intake: IntakePipeline,
    pub order_service: Arc<OrderService>,
}

impl AppState {
    pub fn new(intake: IntakePipeline, order_service: Arc<OrderService>) -> Self {
        Self {
            intake,
            order_service,
        }
    }
}
