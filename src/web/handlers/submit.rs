//! Order form submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};
use std::collections::HashMap;

use crate::domain::entities::FinalizedOrder;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::money::format_amount;

/// One row of the order summary.
pub struct SummaryLine {
    pub name: String,
    pub quantity: i64,
    pub total_price: String,
}

/// Template for the order summary page.
///
/// Renders `templates/order_summary.html`. All values are HTML-escaped.
#[derive(Template, WebTemplate)]
#[template(path = "order_summary.html")]
pub struct OrderSummaryTemplate {
    pub name: String,
    pub phone_number: String,
    pub lines: Vec<SummaryLine>,
    pub total_price: String,
}

impl From<&FinalizedOrder> for OrderSummaryTemplate {
    fn from(order: &FinalizedOrder) -> Self {
        Self {
            name: order.customer_info.name().to_string(),
            phone_number: order.customer_info.phone_number().to_string(),
            lines: order
                .order_details
                .iter()
                .map(|line| SummaryLine {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    total_price: format_amount(line.total_price),
                })
                .collect(),
            total_price: format_amount(order.total_price),
        }
    }
}

/// Validates, prices, stores and summarizes a submitted order.
///
/// # Endpoint
///
/// `POST /submit` with an `application/x-www-form-urlencoded` body:
/// `name`, `phoneNumber` and optional item quantities (`Dosa`, `Puri`,
/// `Vada`, `Bonda`).
///
/// A body that cannot be read as a form is treated as an empty form, so the
/// client gets the missing-field message.
///
/// # Errors
///
/// - 400 with the [`crate::error::IntakeError`] message for bad input
/// - 500 with the order-processing notice if the store rejects a write
pub async fn submit_handler(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<OrderSummaryTemplate, AppError> {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::warn!(%rejection, "Unreadable order form body");
            HashMap::new()
        }
    };

    let record = state.intake.run(&fields)?;
    let order = state.order_service.finalize(record).await?;

    Ok(OrderSummaryTemplate::from(&order))
}
