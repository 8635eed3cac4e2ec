//! Order line construction from raw form quantities.

use std::collections::HashMap;

use crate::domain::entities::OrderLine;
use crate::domain::menu::MenuCatalog;
use crate::utils::leading_int::parse_leading_int;

/// Builds priced order lines for every catalog item ordered in `fields`.
///
/// Walks the catalog in order and looks up each item by its exact name.
/// A line is emitted only when the value's leading integer is positive;
/// absent, zero, negative and non-numeric values are skipped silently.
/// Fields that are not catalog items are ignored.
pub fn build_order_lines(catalog: &MenuCatalog, fields: &HashMap<String, String>) -> Vec<OrderLine> {
    catalog
        .items()
        .iter()
        .filter_map(|item| {
            let raw = fields.get(&item.name)?;
            let quantity = parse_leading_int(raw)?;
            if quantity <= 0 {
                return None;
            }
            Some(OrderLine::for_item(item, quantity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::MenuItem;
    use rust_decimal::Decimal;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_item() {
        let lines = build_order_lines(MenuCatalog::standard(), &fields(&[("Dosa", "2")]));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Dosa");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].total_price, Decimal::new(6198, 2));
    }

    #[test]
    fn test_lines_follow_catalog_order() {
        let lines = build_order_lines(
            MenuCatalog::standard(),
            &fields(&[("Bonda", "1"), ("Dosa", "1"), ("Vada", "1"), ("Puri", "1")]),
        );

        let names: Vec<&str> = lines.iter().map(|line| line.name.as_str()).collect();
        assert_eq!(names, vec!["Dosa", "Puri", "Vada", "Bonda"]);
    }

    #[test]
    fn test_invalid_quantities_are_skipped() {
        let lines = build_order_lines(
            MenuCatalog::standard(),
            &fields(&[("Dosa", "0"), ("Puri", "abc"), ("Vada", "-3"), ("Bonda", "")]),
        );

        assert!(lines.is_empty());
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        let lines = build_order_lines(
            MenuCatalog::standard(),
            &fields(&[("Puri", "3 please"), ("Vada", "2.9")]),
        );

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].total_price, Decimal::new(7797, 2));
        assert_eq!(lines[1].quantity, 2);
        assert_eq!(lines[1].total_price, Decimal::new(4198, 2));
    }

    #[test]
    fn test_large_quantities_are_priced() {
        let lines = build_order_lines(
            MenuCatalog::standard(),
            &fields(&[("Dosa", "5000000000"), ("Bonda", "99999999999999999999999")]),
        );

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Dosa");
        assert_eq!(lines[0].quantity, 5_000_000_000);
        assert_eq!(lines[0].total_price, Decimal::new(15_495_000_000_000, 2));
        assert_eq!(lines[1].name, "Bonda");
        assert_eq!(lines[1].quantity, i64::MAX);
        assert_eq!(
            lines[1].total_price,
            Decimal::from(i64::MAX) * Decimal::new(4099, 2)
        );
    }

    #[test]
    fn test_unknown_and_differently_cased_fields_are_ignored() {
        let lines = build_order_lines(
            MenuCatalog::standard(),
            &fields(&[
                ("name", "Asha"),
                ("phoneNumber", "5551234567"),
                ("dosa", "4"),
                ("Idli", "2"),
            ]),
        );

        assert!(lines.is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let input = fields(&[("Dosa", "2"), ("Bonda", "3"), ("Vada", "x")]);

        let first = build_order_lines(MenuCatalog::standard(), &input);
        let second = build_order_lines(MenuCatalog::standard(), &input);

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MenuCatalog::new(vec![MenuItem::new("Idli", Decimal::new(1550, 2))]);
        let lines = build_order_lines(&catalog, &fields(&[("Idli", "2"), ("Dosa", "1")]));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Idli");
        assert_eq!(lines[0].total_price, Decimal::new(3100, 2));
    }
}
