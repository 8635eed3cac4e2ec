//! Customer entities.

use chrono::{DateTime, Utc};

/// Validated customer details taken from the order form.
///
/// Only built by [`crate::application::intake::validate_customer_info`], so
/// holding one means the name is non-empty and the phone number is exactly
/// ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    name: String,
    phone_number: String,
}

impl CustomerInfo {
    pub(crate) fn new(name: String, phone_number: String) -> Self {
        Self { name, phone_number }
    }

    /// Customer name as submitted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized, digits-only phone number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

/// A customer record as stored in the `customers` table.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(id: i64, name: String, phone_number: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            phone_number,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_info_accessors() {
        let info = CustomerInfo::new("Asha".to_string(), "5551234567".to_string());

        assert_eq!(info.name(), "Asha");
        assert_eq!(info.phone_number(), "5551234567");
    }

    #[test]
    fn test_customer_creation() {
        let now = Utc::now();
        let customer = Customer::new(3, "Bo".to_string(), "5550001111".to_string(), now);

        assert_eq!(customer.id, 3);
        assert_eq!(customer.name, "Bo");
        assert_eq!(customer.phone_number, "5550001111");
        assert_eq!(customer.created_at, now);
    }
}
