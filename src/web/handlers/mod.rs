//! HTML handlers for the order form.

mod submit;

pub use submit::{OrderSummaryTemplate, SummaryLine, submit_handler};
