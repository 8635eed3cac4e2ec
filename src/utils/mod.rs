//! Utility functions for input normalization and formatting.
//!
//! This module provides helper functions used across the application:
//!
//! - [`phone_normalizer`] - Phone number normalization and validation
//! - [`leading_int`] - Permissive integer parsing for form quantities
//! - [`money`] - Currency amount formatting

pub mod leading_int;
pub mod money;
pub mod phone_normalizer;
