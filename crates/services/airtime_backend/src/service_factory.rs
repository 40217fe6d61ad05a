// --- File: crates/services/airtime_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the storage client and the repositories the routers are wired
//! with, and prepares the schema on startup.

use airtime_common::{log_result, AirtimeError};
use airtime_config::AppConfig;
use airtime_db::{
    DbClient, DbClientFactory, RepositoryFactory, SqlTimeSlotRepository, SqlUserRepository,
    TimeSlotRepository, TimeSlotRepositoryFactory, UserRepository, UserRepositoryFactory,
};
use std::sync::Arc;
use tracing::info;

/// Service factory holding every storage-backed service the backend serves.
pub struct AirtimeServiceFactory {
    db_client: DbClient,
    time_slot_repo: SqlTimeSlotRepository,
    user_repo: SqlUserRepository,
}

impl AirtimeServiceFactory {
    /// Create a new service factory.
    ///
    /// Connects to the configured database, builds the repositories, and
    /// creates their tables if they don't exist yet.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, AirtimeError> {
        info!("Initializing storage services...");

        let db_client = DbClientFactory::new()
            .from_app_config(&config)
            .await
            .map_err(|e| AirtimeError::DatabaseError(e.to_string()))?;

        let time_slot_repo = TimeSlotRepositoryFactory::new().create_repository(db_client.clone());
        let user_repo = UserRepositoryFactory::new().create_repository(db_client.clone());

        log_result(
            time_slot_repo.init_schema().await,
            "Time slot schema ready",
            "Failed to prepare time slot schema",
        )
        .map_err(|e| AirtimeError::DatabaseError(e.to_string()))?;
        log_result(
            user_repo.init_schema().await,
            "User schema ready",
            "Failed to prepare user schema",
        )
        .map_err(|e| AirtimeError::DatabaseError(e.to_string()))?;

        Ok(Self {
            db_client,
            time_slot_repo,
            user_repo,
        })
    }

    pub fn db_client(&self) -> &DbClient {
        &self.db_client
    }

    pub fn time_slot_repo(&self) -> SqlTimeSlotRepository {
        self.time_slot_repo.clone()
    }

    pub fn user_repo(&self) -> SqlUserRepository {
        self.user_repo.clone()
    }
}
