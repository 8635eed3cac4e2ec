//! Repository trait for customer records.

use crate::domain::entities::{Customer, CustomerInfo};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the customers collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Stores one customer record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Integration`] on database errors.
    async fn insert(&self, customer: &CustomerInfo) -> Result<Customer, AppError>;

    /// Checks that the underlying store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Integration`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
