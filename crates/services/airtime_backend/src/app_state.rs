// --- File: crates/services/airtime_backend/src/app_state.rs ---
use crate::service_factory::AirtimeServiceFactory;
use airtime_common::AirtimeError;
use airtime_config::AppConfig;
use airtime_db::{DbClient, SqlTimeSlotRepository, SqlUserRepository};
use std::sync::Arc;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration.
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,

    /// Factory holding the storage client and the repositories built on it.
    service_factory: Arc<AirtimeServiceFactory>,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    ///
    /// Connects to the configured database and prepares the schema before
    /// any route is served.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, AirtimeError> {
        let service_factory = Arc::new(AirtimeServiceFactory::new(config.clone()).await?);
        Ok(Self {
            config,
            service_factory,
        })
    }

    pub fn db_client(&self) -> &DbClient {
        self.service_factory.db_client()
    }

    pub fn user_repo(&self) -> SqlUserRepository {
        self.service_factory.user_repo()
    }

    pub fn time_slot_repo(&self) -> SqlTimeSlotRepository {
        self.service_factory.time_slot_repo()
    }
}
