//! Application error types and the single point where failures become
//! client-visible HTTP responses.
//!
//! Every failure that reaches the response boundary is one of the
//! [`AppError`] variants below, and [`IntoResponse`] renders each variant
//! into the uniform envelope
//! `{ "statusCode": _, "error": _, "message": _, "issues"?: [_] }`.
//! Database failures are classified structurally from [`sqlx::Error`]
//! (error kind and constraint name), never by matching message text.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    /// Input failed its endpoint contract; carries every violated field.
    Validation(Vec<ValidationIssue>),
    /// The request body itself was unusable (not JSON, wrong content type).
    BadRequest(String),
    /// Credentials or token rejected. The message must never reveal which
    /// of email/password was wrong.
    Unauthorized(String),
    /// A referenced resource does not exist.
    NotFound,
    /// A unique constraint was violated on the named field.
    Conflict { field: String },
    /// Anything else. The cause is logged server-side only.
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        Self::Validation(issues)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssue>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, issues) = match self {
            AppError::Validation(issues) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Validation failed".to_string(),
                Some(issues),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "Bad Request", message, None)
            }
            AppError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", message, None)
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "Resource not found".to_string(),
                None,
            ),
            AppError::Conflict { field } => (
                StatusCode::CONFLICT,
                "Conflict",
                format!("Unique constraint violation on field: {}", field),
                None,
            ),
            AppError::Internal(cause) => {
                tracing::error!(error = ?cause, "Unhandled error reached the response boundary");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            error: error.to_string(),
            message,
            issues,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return AppError::NotFound;
        }

        if let sqlx::Error::Database(ref db) = err {
            match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    let field = db
                        .constraint()
                        .map(constraint_field)
                        .unwrap_or_else(|| "unknown".to_string());
                    return AppError::Conflict { field };
                }
                // An insert pointing at a row that no longer exists.
                sqlx::error::ErrorKind::ForeignKeyViolation => return AppError::NotFound,
                _ => {}
            }
        }

        AppError::Internal(err.into())
    }
}

/// Recover the column name from a Postgres constraint name, which follows
/// the `<table>_<column>_key` pattern for unique indexes created by our
/// migrations (e.g. `users_email_key` -> `email`).
fn constraint_field(constraint: &str) -> String {
    let parts: Vec<&str> = constraint.split('_').collect();
    if parts.len() >= 3 && matches!(*parts.last().unwrap(), "key" | "idx" | "fkey") {
        parts[1..parts.len() - 1].join("_")
    } else {
        constraint.to_string()
    }
}
