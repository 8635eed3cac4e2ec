//! Two-stage intake pipeline: customer details, then order lines.

use std::collections::HashMap;

use crate::application::intake::{build_order_lines, validate_customer_info};
use crate::domain::entities::IntakeRecord;
use crate::domain::menu::MenuCatalog;
use crate::error::IntakeError;

/// Form field carrying the customer name.
pub const NAME_FIELD: &str = "name";

/// Form field carrying the customer phone number.
pub const PHONE_FIELD: &str = "phoneNumber";

/// Turns raw form fields into a validated [`IntakeRecord`].
///
/// # Stages
///
/// 1. Customer details are validated; a failure stops the pipeline and the
///    second stage never runs
/// 2. Every other field is treated as a candidate item quantity and priced
///    against the catalog
///
/// The stages do not share data: the second stage never sees the output of
/// the first.
#[derive(Debug, Clone, Copy)]
pub struct IntakePipeline {
    catalog: &'static MenuCatalog,
}

impl IntakePipeline {
    pub fn new(catalog: &'static MenuCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static MenuCatalog {
        self.catalog
    }

    /// Runs both stages over one request's form fields.
    ///
    /// # Errors
    ///
    /// Returns the [`IntakeError`] of the customer stage.
    pub fn run(&self, fields: &HashMap<String, String>) -> Result<IntakeRecord, IntakeError> {
        let customer_info = validate_customer_info(
            fields.get(NAME_FIELD).map(String::as_str),
            fields.get(PHONE_FIELD).map(String::as_str),
        )?;

        let order_details = build_order_lines(self.catalog, fields);

        Ok(IntakeRecord {
            customer_info,
            order_details,
        })
    }
}

impl Default for IntakePipeline {
    fn default() -> Self {
        Self::new(MenuCatalog::standard())
    }
}
