//! Database integration for Airtime
//!
//! This crate provides a database client that is designed to be database agnostic,
//! using SQLx as the underlying database library. It supports SQLite, PostgreSQL,
//! and MySQL databases through feature flags, and carries the repositories the
//! booking engine and session verifier run against.
//!
//! # Features
//!
//! - Database agnostic design
//! - Connection pooling
//! - Integration with the Airtime configuration system
//! - Support for SQLite, PostgreSQL, and MySQL
//!
//! # Example
//!
//! ```rust,no_run
//! use airtime_config::load_config;
//! use airtime_db::DbClient;
//! use std::sync::Arc;
//!
//! async fn setup_db() -> Result<DbClient, Box<dyn std::error::Error>> {
//!     let config = Arc::new(load_config()?);
//!     let db_client = DbClient::new(&config).await?;
//!     Ok(db_client)
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

// Register the SQLite driver when the crate is loaded
#[cfg(feature = "sqlite")]
mod sqlite_driver {
    // This import ensures the SQLite driver is linked and registered
    #[allow(unused_imports)]
    use sqlx::sqlite::SqlitePoolOptions as _;
}

// Re-export the client, error, and factory types for ease of use
pub use client::{DbClient, DbTransaction};
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repository::RepositoryFactory;

// Re-export the repositories module components for ease of use
pub use repositories::{
    NewSlotDefinition, NewUser, SlotDefinition, SlotStatus, SqlTimeSlotRepository,
    SqlUserRepository, TimeSlot, TimeSlotRepository, TimeSlotRepositoryFactory, UserRecord,
    UserRepository, UserRepositoryFactory,
};
