//! Error types and their HTTP mapping.
//!
//! - [`IntakeError`] - user-correctable form input problems (400)
//! - [`AppError`] - everything a handler can fail with, rendered as a
//!   plain-text response after being logged

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body sent when an order could not be stored.
pub const ORDER_PROCESSING_FAILED: &str =
    "Error occurred while processing the order. Please try again.";

/// Body sent for any other unexpected fault.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Rejections raised while validating the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Name and phone number are required.")]
    MissingField,

    #[error("Invalid phone number format.")]
    InvalidPhoneFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] IntakeError),

    /// The persistence layer failed. Not user-correctable.
    #[error("Integration error: {message}")]
    Integration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn integration(message: impl Into<String>) -> Self {
        Self::Integration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Integration { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the client. Server-side details never leak into it.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Integration { .. } => ORDER_PROCESSING_FAILED.to_string(),
            AppError::Internal { .. } => INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::integration(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        (status, self.public_message()).into_response()
    }
}
