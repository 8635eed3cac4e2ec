//! Repository trait definitions for the domain layer.
//!
//! The order finalizer writes to two independent collections, one per trait.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer records
//! - [`OrderRepository`] - Order line records

pub mod customer_repository;
pub mod order_repository;

pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
