/// Error types for Blog Service
///
/// Every failure a handler can produce maps onto one HTTP status. Bodies are plain
/// text; driver errors are logged but never echoed to the client.
use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::metrics;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed JSON or a missing required field
    #[error("{0}")]
    BadRequest(String),

    /// Missing resource, unparseable identifier, or nothing deleted
    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Uniqueness violation reported by the store
    #[error("{0}")]
    Conflict(String),

    /// Any other store failure
    #[error("{context}")]
    Store {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn store(context: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Store {
            context: context.into(),
            source,
        }
    }

    /// Classify a failed insert: unique violations become `Conflict`, the rest `Store`.
    pub fn from_insert(err: sqlx::Error, conflict: &str, context: &str) -> Self {
        if is_unique_violation(&err) {
            AppError::Conflict(conflict.to_string())
        } else {
            AppError::store(context, err)
        }
    }

    /// Label used for the error counter
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::MethodNotAllowed => "method_not_allowed",
            AppError::Conflict(_) => "conflict",
            AppError::Store { .. } => "store_failure",
        }
    }
}

/// Uses the driver's SQLSTATE classification (23505 on PostgreSQL).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if let AppError::Store { context, source } = self {
            tracing::error!(error = %source, "{}", context);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }
        metrics::record_error(self.kind());

        HttpResponse::build(status)
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::store("Database error", err)
    }
}
