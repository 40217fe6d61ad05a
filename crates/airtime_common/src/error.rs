// --- File: crates/airtime_common/src/error.rs ---
use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The base error type for all Airtime errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for AirtimeError.
#[derive(Error, Debug)]
pub enum AirtimeError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AirtimeError {
    fn status_code(&self) -> u16 {
        match self {
            AirtimeError::ConfigError(_) => 500,
            AirtimeError::AuthError(_) => 401,
            AirtimeError::ValidationError(_) => 400,
            AirtimeError::DatabaseError(_) => 500,
            AirtimeError::ConflictError(_) => 409,
            AirtimeError::NotFoundError(_) => 404,
            AirtimeError::InternalError(_) => 500,
        }
    }
}

/// Converts an error carrying a status code into the `(StatusCode, String)`
/// response shape used by the HTTP handlers.
pub fn error_response<E>(err: &E) -> (StatusCode, String)
where
    E: HttpStatusCode + fmt::Display,
{
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_category() {
        assert_eq!(
            AirtimeError::AuthError("bad credentials".into()).status_code(),
            401
        );
        assert_eq!(
            AirtimeError::ValidationError("from after to".into()).status_code(),
            400
        );
        assert_eq!(
            AirtimeError::ConflictError("slot taken".into()).status_code(),
            409
        );
        assert_eq!(
            AirtimeError::DatabaseError("pool exhausted".into()).status_code(),
            500
        );
    }

    #[test]
    fn error_response_carries_display_message() {
        let (status, body) = error_response(&AirtimeError::NotFoundError("no such slot".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found: no such slot");
    }
}
