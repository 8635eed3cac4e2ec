//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customer records
//! - [`PgOrderRepository`] - Order line records

pub mod pg_customer_repository;
pub mod pg_order_repository;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_order_repository::PgOrderRepository;
