//! Browser-facing layer: the order form submission and its summary page.
//!
//! The form itself is a static file (see [`crate::routes`]); the summary is
//! rendered server-side with Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Form handling and template rendering
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;
