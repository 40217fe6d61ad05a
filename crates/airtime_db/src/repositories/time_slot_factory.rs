//! Factory for creating time slot repositories

use crate::repositories::time_slot_sql::SqlTimeSlotRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating time slot repositories
#[derive(Debug, Clone)]
pub struct TimeSlotRepositoryFactory;

impl TimeSlotRepositoryFactory {
    /// Create a new time slot repository factory.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeSlotRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlTimeSlotRepository, DbClient> for TimeSlotRepositoryFactory {
    /// Create a new time slot repository backed by the given client.
    fn create_repository(&self, db_client: DbClient) -> SqlTimeSlotRepository {
        SqlTimeSlotRepository::new(db_client)
    }
}
