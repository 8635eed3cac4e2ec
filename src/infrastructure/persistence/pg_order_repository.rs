//! PostgreSQL implementation of order line repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{OrderLine, OrderLineRecord};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct OrderLineRow {
    id: i64,
    customer_id: i64,
    name: String,
    quantity: i64,
    total_price: Decimal,
    created_at: DateTime<Utc>,
}

impl From<OrderLineRow> for OrderLineRecord {
    fn from(row: OrderLineRow) -> Self {
        OrderLineRecord {
            id: row.id,
            customer_id: row.customer_id,
            name: row.name,
            quantity: row.quantity,
            total_price: row.total_price,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for order line records.
///
/// All lines of one order are written with a single multi-row `INSERT`.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn insert_many(
        &self,
        customer_id: i64,
        lines: &[OrderLine],
    ) -> Result<Vec<OrderLineRecord>, AppError> {
        if lines.is_empty() {
            return Err(AppError::internal("insert_many called without order lines"));
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO order_lines (customer_id, name, quantity, total_price) ");

        builder.push_values(lines, |mut row, line| {
            row.push_bind(customer_id)
                .push_bind(line.name.clone())
                .push_bind(line.quantity)
                .push_bind(line.total_price);
        });
        builder.push(" RETURNING id, customer_id, name, quantity, total_price, created_at");

        let rows = builder
            .build_query_as::<OrderLineRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(OrderLineRecord::from).collect())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<OrderLineRecord>, AppError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT id, customer_id, name, quantity, total_price, created_at
            FROM order_lines
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(OrderLineRecord::from).collect())
    }
}
