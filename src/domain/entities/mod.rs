//! Core domain entities representing the order data model.
//!
//! # Entity Types
//!
//! - [`CustomerInfo`] - Validated customer details from the order form
//! - [`Customer`] - A stored customer record
//! - [`OrderLine`] - One priced item of an order
//! - [`OrderLineRecord`] - A stored order line
//! - [`IntakeRecord`] - Customer details plus order lines for one request
//! - [`FinalizedOrder`] - A persisted order with its grand total

pub mod customer;
pub mod intake;
pub mod order_line;

pub use customer::{Customer, CustomerInfo};
pub use intake::{FinalizedOrder, IntakeRecord};
pub use order_line::{OrderLine, OrderLineRecord};
