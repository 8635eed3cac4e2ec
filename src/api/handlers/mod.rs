//! HTTP request handlers for JSON endpoints.

pub mod health;
pub mod menu;

pub use health::health_handler;
pub use menu::menu_handler;
