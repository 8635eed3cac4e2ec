//! PostgreSQL implementation of customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerInfo};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::new(row.id, row.name, row.phone_number, row.created_at)
    }
}

/// PostgreSQL repository for customer records.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn insert(&self, customer: &CustomerInfo) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, phone_number)
            VALUES ($1, $2)
            RETURNING id, name, phone_number, created_at
            "#,
        )
        .bind(customer.name())
        .bind(customer.phone_number())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
