//! SQL implementation of the user repository

use crate::error::DbError;
use crate::repositories::user::{NewUser, UserRecord, UserRepository};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlUserRepository {
    /// Create a new SQL user repository.
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    fn row_to_user(row: &sqlx::any::AnyRow) -> Result<UserRecord, DbError> {
        Ok(UserRecord {
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            phone_number: row.try_get("phone_number")?,
            role: row.try_get("role")?,
        })
    }
}

impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing user schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                phone_number TEXT NOT NULL UNIQUE,
                password_digest TEXT NOT NULL,
                role TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("User schema initialized successfully");
        Ok(())
    }

    async fn insert_user(&self, user: NewUser) -> Result<Option<UserRecord>, DbError> {
        debug!("Inserting user with phone number: {}", user.phone_number);

        // The phone number is the login key; a known duplicate is refused
        // up front.
        let existing = sqlx::query("SELECT user_id FROM users WHERE phone_number = $1")
            .bind(&user.phone_number)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to check for existing user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if existing.is_some() {
            return Ok(None);
        }

        let query = r#"
            INSERT INTO users (name, phone_number, password_digest, role)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, name, phone_number, role
        "#;

        let row = match sqlx::query(query)
            .bind(&user.name)
            .bind(&user.phone_number)
            .bind(&user.password_digest)
            .bind(&user.role)
            .fetch_one(self.db_client.pool())
            .await
        {
            Ok(row) => row,
            // A concurrent registration can slip past the pre-check; the
            // UNIQUE constraint reports the loser here.
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => return Ok(None),
            Err(e) => {
                error!("Failed to insert user: {}", e);
                return Err(DbError::QueryError(e.to_string()));
            }
        };

        let inserted = Self::row_to_user(&row)?;
        info!("User {} created successfully", inserted.user_id);
        Ok(Some(inserted))
    }

    async fn find_by_phone_and_digest(
        &self,
        phone_number: &str,
        password_digest: &str,
    ) -> Result<Option<UserRecord>, DbError> {
        debug!("Looking up user by phone number: {}", phone_number);

        let query = r#"
            SELECT user_id, name, phone_number, role
            FROM users
            WHERE phone_number = $1 AND password_digest = $2
        "#;

        let result = sqlx::query(query)
            .bind(phone_number)
            .bind(password_digest)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to look up user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
