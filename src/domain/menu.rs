//! Menu catalog of purchasable items and their unit prices.

use rust_decimal::Decimal;
use std::sync::LazyLock;

/// The catalog served by the restaurant.
static STANDARD_MENU: LazyLock<MenuCatalog> = LazyLock::new(|| {
    MenuCatalog::new(vec![
        MenuItem::new("Dosa", Decimal::new(3099, 2)),
        MenuItem::new("Puri", Decimal::new(2599, 2)),
        MenuItem::new("Vada", Decimal::new(2099, 2)),
        MenuItem::new("Bonda", Decimal::new(4099, 2)),
    ])
});

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub unit_price: Decimal,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// Ordered, read-only list of menu items.
///
/// Iteration order decides the order of the resulting order lines.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Returns the process-wide restaurant menu.
    pub fn standard() -> &'static MenuCatalog {
        &STANDARD_MENU
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Finds an item by its exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }
}
