//! Repository for user credentials
//!
//! This module defines the credential store the session verifier
//! authenticates against. Passwords never reach the database; callers hash
//! them and look records up by phone number and digest.

use crate::error::DbError;

/// A stored user, without credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: i64,
    pub name: String,
    pub phone_number: String,
    /// Access role, e.g. "ADMIN" or "SALES_PERSON"
    pub role: String,
}

/// Input for inserting a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub phone_number: String,
    /// Hex-encoded SHA-256 digest of the password
    pub password_digest: String,
    pub role: String,
}

/// Repository for users
pub trait UserRepository {
    /// Initialize the database schema
    ///
    /// Creates the users table if it doesn't already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Insert a user.
    ///
    /// # Returns
    ///
    /// The stored record with its assigned id, or `None` when the phone
    /// number is already taken.
    fn insert_user(
        &self,
        user: NewUser,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, DbError>> + Send;

    /// Find a user by phone number and password digest.
    ///
    /// # Returns
    ///
    /// The matching record, or `None` when either the phone number is
    /// unknown or the digest does not match.
    fn find_by_phone_and_digest(
        &self,
        phone_number: &str,
        password_digest: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, DbError>> + Send;
}
