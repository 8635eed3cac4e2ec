#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use order_intake::application::intake::IntakePipeline;
use order_intake::application::services::OrderService;
use order_intake::domain::entities::{Customer, CustomerInfo, OrderLine, OrderLineRecord};
use order_intake::domain::repositories::{CustomerRepository, OrderRepository};
use order_intake::error::AppError;
use order_intake::state::AppState;
use std::sync::{Arc, Mutex};

/// Customer store kept in memory. Fails every call when `failing` is set.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    pub customers: Mutex<Vec<Customer>>,
    pub failing: bool,
}

impl InMemoryCustomerRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert(&self, customer: &CustomerInfo) -> Result<Customer, AppError> {
        if self.failing {
            return Err(AppError::integration("customers store unavailable"));
        }

        let mut customers = self.customers.lock().unwrap();
        let stored = Customer::new(
            customers.len() as i64 + 1,
            customer.name().to_string(),
            customer.phone_number().to_string(),
            Utc::now(),
        );
        customers.push(stored.clone());
        Ok(stored)
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::integration("customers store unavailable"));
        }
        Ok(())
    }
}

/// Order line store kept in memory. Fails every call when `failing` is set.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    pub lines: Mutex<Vec<OrderLineRecord>>,
    pub failing: bool,
}

impl InMemoryOrderRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert_many(
        &self,
        customer_id: i64,
        lines: &[OrderLine],
    ) -> Result<Vec<OrderLineRecord>, AppError> {
        if self.failing {
            return Err(AppError::integration("orders store unavailable"));
        }

        let mut stored_lines = self.lines.lock().unwrap();
        let mut inserted = Vec::with_capacity(lines.len());
        for line in lines {
            let record = OrderLineRecord {
                id: stored_lines.len() as i64 + 1,
                customer_id,
                name: line.name.clone(),
                quantity: line.quantity,
                total_price: line.total_price,
                created_at: Utc::now(),
            };
            stored_lines.push(record.clone());
            inserted.push(record);
        }
        Ok(inserted)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<OrderLineRecord>, AppError> {
        let stored_lines = self.lines.lock().unwrap();
        Ok(stored_lines
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

pub fn create_test_state(
    customers: Arc<InMemoryCustomerRepository>,
    orders: Arc<InMemoryOrderRepository>,
) -> AppState {
    let order_service = Arc::new(OrderService::new(customers, orders));
    AppState::new(IntakePipeline::default(), order_service)
}

pub fn create_default_state() -> (
    AppState,
    Arc<InMemoryCustomerRepository>,
    Arc<InMemoryOrderRepository>,
) {
    let customers = Arc::new(InMemoryCustomerRepository::default());
    let orders = Arc::new(InMemoryOrderRepository::default());
    let state = create_test_state(customers.clone(), orders.clone());
    (state, customers, orders)
}
