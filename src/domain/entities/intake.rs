//! Intake record and finalized order.

use rust_decimal::Decimal;

use super::{CustomerInfo, OrderLine};

/// Validated customer details and priced order lines for one request.
///
/// Produced by [`crate::application::intake::IntakePipeline`] and consumed
/// once by [`crate::application::services::OrderService::finalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRecord {
    pub customer_info: CustomerInfo,
    pub order_details: Vec<OrderLine>,
}

/// An order that has been persisted, with its grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedOrder {
    pub customer_info: CustomerInfo,
    pub order_details: Vec<OrderLine>,
    pub total_price: Decimal,
}

impl FinalizedOrder {
    /// Computes the grand total of an intake record.
    ///
    /// An order without lines totals zero.
    pub fn from_record(record: IntakeRecord) -> Self {
        let total_price = record
            .order_details
            .iter()
            .map(|line| line.total_price)
            .sum();

        Self {
            customer_info: record.customer_info,
            order_details: record.order_details,
            total_price,
        }
    }
}
