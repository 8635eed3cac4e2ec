//! DTOs for the menu endpoint.

use serde::Serialize;

use crate::domain::menu::MenuItem;
use crate::utils::money::format_amount;

/// One catalog entry. Prices are strings with two decimals.
#[derive(Debug, Serialize)]
pub struct MenuItemResponse {
    pub name: String,
    pub unit_price: String,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            unit_price: format_amount(item.unit_price),
        }
    }
}
