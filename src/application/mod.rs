//! Application layer implementing order intake and finalization.
//!
//! # Modules
//!
//! - [`intake`] - Pure validation and pricing of the order form
//! - [`services::order_service::OrderService`] - Totals, persistence and logging
//!   of a validated order

pub mod intake;
pub mod services;
