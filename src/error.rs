//! Error taxonomy shared by services and handlers.
//!
//! Every failure is terminal for the request that caused it and is rendered
//! as `{ "message": ..., "errors": [...] }` with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::entities::prelude::VerificationStatus;
use crate::models::common::{ErrorResponse, FieldError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Malformed or missing input
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// An order line references a product that does not exist
    #[error("Product with id {0} not found")]
    ProductNotFound(i32),

    #[error("Not enough stock for {name}. Available: {available}")]
    InsufficientStock {
        product_id: i32,
        name: String,
        available: u32,
        requested: u32,
    },

    /// Duplicate unique key
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Retailer is not allowed to place bulk orders yet
    #[error("Retailer account is not verified. Current status: {0}")]
    NotVerified(VerificationStatus),

    #[error("Invalid {entity} status transition: {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        AppError::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        AppError::Validation {
            message: message.clone(),
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn not_found(entity: &str) -> Self {
        AppError::NotFound(format!("{} not found", entity))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InsufficientStock { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) | AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotVerified(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { message, errors } => ErrorResponse {
                message,
                errors: if errors.is_empty() { None } else { Some(errors) },
            },
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                ErrorResponse {
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            other => ErrorResponse {
                message: other.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
