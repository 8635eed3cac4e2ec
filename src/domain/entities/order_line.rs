//! Order line entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::menu::MenuItem;

/// One ordered menu item with its quantity and computed subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i64,
    pub total_price: Decimal,
}

impl OrderLine {
    /// Prices `quantity` units of a menu item.
    ///
    /// `Decimal` holds `i64::MAX` units of any menu price exactly.
    pub fn for_item(item: &MenuItem, quantity: i64) -> Self {
        Self {
            name: item.name.clone(),
            quantity,
            total_price: item.unit_price * Decimal::from(quantity),
        }
    }
}

/// An order line as stored in the `order_lines` table.
#[derive(Debug, Clone)]
pub struct OrderLineRecord {
    pub id: i64,
    pub customer_id: i64,
    pub name: String,
    pub quantity: i64,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
}
