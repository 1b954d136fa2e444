//! Error types for Eventmap server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Machine-readable error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    BadValue,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorCode::BadValue,
        }
    }
}

/// Error details
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    pub error: ErrorBody,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::BadRequest(msg) => msg,
        };

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorBody { code, message },
        });

        (status, body).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_message(&errors, &[]))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Pick a single human-readable message out of a validation report.
///
/// Fields listed in `field_order` are visited first, in that order, then any
/// others by name. Nested structs such as `location` are searched
/// recursively with the same ordering.
pub fn validation_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    use validator::ValidationErrorsKind;

    fn rank(field_order: &[&str], name: &str) -> usize {
        field_order
            .iter()
            .position(|f| *f == name)
            .unwrap_or(usize::MAX)
    }

    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| {
        (rank(field_order, a.0), a.0).cmp(&(rank(field_order, b.0), b.0))
    });

    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(list) => {
                if let Some(err) = list.first() {
                    return err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field));
                }
            }
            ValidationErrorsKind::Struct(inner) => return validation_message(inner, field_order),
            ValidationErrorsKind::List(items) => {
                if let Some(inner) = items.values().next() {
                    return validation_message(inner, field_order);
                }
            }
        }
    }

    "Invalid request".to_string()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
