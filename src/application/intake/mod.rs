//! Order intake: validation and pricing of the submitted order form.
//!
//! - [`customer_info`] - name and phone number checks
//! - [`order_lines`] - quantity parsing and line pricing
//! - [`pipeline`] - the two stages composed into one [`IntakeRecord`]
//!
//! Everything here is synchronous and free of side effects.
//!
//! [`IntakeRecord`]: crate::domain::entities::IntakeRecord

pub mod customer_info;
pub mod order_lines;
pub mod pipeline;

pub use customer_info::validate_customer_info;
pub use order_lines::build_order_lines;
pub use pipeline::IntakePipeline;
