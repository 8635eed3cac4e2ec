//! Repository trait for order line records.

use crate::domain::entities::{OrderLine, OrderLineRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the order lines collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores every line of one order, attributed to `customer_id`.
    ///
    /// Callers must not pass an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Integration`] on database errors.
    async fn insert_many(
        &self,
        customer_id: i64,
        lines: &[OrderLine],
    ) -> Result<Vec<OrderLineRecord>, AppError>;

    /// Lists the most recently stored lines, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Integration`] on database errors.
    async fn recent(&self, limit: i64) -> Result<Vec<OrderLineRecord>, AppError>;
}
