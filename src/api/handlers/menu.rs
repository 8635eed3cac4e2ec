//! Handler for the menu listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::menu::MenuItemResponse;
use crate::state::AppState;

/// Lists the catalog in the order lines are built.
///
/// # Endpoint
///
/// `GET /menu`
///
/// # Response
///
/// ```json
/// [
///   { "name": "Dosa", "unit_price": "30.99" },
///   { "name": "Puri", "unit_price": "25.99" }
/// ]
/// ```
pub async fn menu_handler(State(state): State<AppState>) -> Json<Vec<MenuItemResponse>> {
    Json(
        state
            .intake
            .catalog()
            .items()
            .iter()
            .map(MenuItemResponse::from)
            .collect(),
    )
}
