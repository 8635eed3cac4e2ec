//! Domain layer containing order entities, the menu and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`menu`] - The fixed catalog of purchasable items
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Intake validation lives in [`crate::application::intake`].

pub mod entities;
pub mod menu;
pub mod repositories;
