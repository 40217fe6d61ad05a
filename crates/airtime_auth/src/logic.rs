// --- File: crates/airtime_auth/src/logic.rs ---
use airtime_common::HttpStatusCode;
use airtime_db::{DbError, UserRecord, UserRepository};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

impl HttpStatusCode for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 401,
            AuthError::Storage(_) => 500,
        }
    }
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LoginRequest {
    /// Phone number the account was registered with
    #[cfg_attr(feature = "openapi", schema(example = "5550100"))]
    pub phone_number: String,
    /// Account password, hashed before it reaches the store
    #[cfg_attr(feature = "openapi", schema(example = "hunter2"))]
    pub password: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LoginResponse {
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub user_id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Asha Rao"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "SALES_PERSON"))]
    pub role: String,
}

// --- Session Verification Logic ---

/// Hex-encoded SHA-256 digest of a password.
///
/// The credential store never sees plaintext; this is the value persisted at
/// registration time and compared at login time.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Verifies a phone number and password against the credential store.
///
/// Lookup is by phone number plus digest, so an unknown number and a wrong
/// password are indistinguishable to the caller.
pub async fn authenticate<R: UserRepository>(
    repo: &R,
    phone_number: &str,
    password: &str,
) -> Result<UserRecord, AuthError> {
    let digest = password_digest(password);
    let user = repo.find_by_phone_and_digest(phone_number, &digest).await?;
    match user {
        Some(record) => {
            info!("User {} authenticated", record.user_id);
            Ok(record)
        }
        None => Err(AuthError::InvalidCredentials),
    }
}
