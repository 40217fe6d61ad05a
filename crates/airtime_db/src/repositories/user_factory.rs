//! Factory for creating user repositories

use crate::repositories::user_sql::SqlUserRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating user repositories
#[derive(Debug, Clone)]
pub struct UserRepositoryFactory;

impl UserRepositoryFactory {
    /// Create a new user repository factory.
    pub fn new() -> Self {
        Self
    }
}

impl Default for UserRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlUserRepository, DbClient> for UserRepositoryFactory {
    /// Create a new user repository backed by the given client.
    fn create_repository(&self, db_client: DbClient) -> SqlUserRepository {
        SqlUserRepository::new(db_client)
    }
}
