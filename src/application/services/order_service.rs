//! Order finalization service.

use std::sync::Arc;

use crate::domain::entities::{FinalizedOrder, IntakeRecord};
use crate::domain::repositories::{CustomerRepository, OrderRepository};
use crate::error::AppError;
use crate::utils::money::format_amount;

/// Service that totals and stores validated orders.
///
/// The customer and its order lines are written by two separate repository
/// calls. There is no transaction spanning both, so a failure on the second
/// write leaves the customer record in place.
pub struct OrderService {
    customer_repository: Arc<dyn CustomerRepository>,
    order_repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(
        customer_repository: Arc<dyn CustomerRepository>,
        order_repository: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            customer_repository,
            order_repository,
        }
    }

    /// Persists an intake record and returns it with its grand total.
    ///
    /// # Flow
    ///
    /// 1. Insert the customer record
    /// 2. Insert the order lines linked to that customer (skipped when the
    ///    order has no lines)
    /// 3. Sum the line totals
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Integration`] if either write fails. Nothing is
    /// retried.
    pub async fn finalize(&self, record: IntakeRecord) -> Result<FinalizedOrder, AppError> {
        let customer = self
            .customer_repository
            .insert(&record.customer_info)
            .await?;

        if !record.order_details.is_empty() {
            self.order_repository
                .insert_many(customer.id, &record.order_details)
                .await?;
        }

        let order = FinalizedOrder::from_record(record);

        tracing::info!(
            customer_id = customer.id,
            name = %order.customer_info.name(),
            phone_number = %order.customer_info.phone_number(),
            "Customer details stored"
        );
        for line in &order.order_details {
            tracing::info!(
                customer_id = customer.id,
                item = %line.name,
                quantity = line.quantity,
                total_price = %format_amount(line.total_price),
                "Order line stored"
            );
        }
        tracing::info!(
            customer_id = customer.id,
            lines = order.order_details.len(),
            total_price = %format_amount(order.total_price),
            "Order finalized"
        );

        Ok(order)
    }

    /// Checks that the order store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Integration`] if the store does not answer.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.customer_repository.ping().await
    }
}
