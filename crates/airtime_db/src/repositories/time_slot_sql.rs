//! SQL implementation of the time slot repository
//!
//! This module provides a SQL implementation of the TimeSlotRepository trait.

use crate::error::DbError;
use crate::repositories::time_slot::{
    NewSlotDefinition, SlotDefinition, SlotStatus, TimeSlot, TimeSlotRepository,
};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info, warn};

/// SQL implementation of the time slot repository
#[derive(Debug, Clone)]
pub struct SqlTimeSlotRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlTimeSlotRepository {
    /// Create a new SQL time slot repository.
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    fn row_to_time_slot(row: &sqlx::any::AnyRow) -> Result<TimeSlot, DbError> {
        let status: String = row.try_get("status")?;
        Ok(TimeSlot {
            slot_ts: row.try_get("slot_ts")?,
            status: SlotStatus::parse(&status)?,
            // NULL doesn't decode into Option<i64> through sqlx::Any
            user_id: row.try_get("user_id").ok(),
            slot_id: row.try_get("slot_id")?,
        })
    }

    fn row_to_definition(row: &sqlx::any::AnyRow) -> Result<SlotDefinition, DbError> {
        Ok(SlotDefinition {
            id: row.try_get("id")?,
            programme_name: row.try_get("programme_name")?,
            plan_type_id: row.try_get("plan_type_id")?,
            slot_from_ts: row.try_get("slot_from")?,
            slot_to_ts: row.try_get("slot_to")?,
        })
    }
}

impl TimeSlotRepository for SqlTimeSlotRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing time slot schema");

        // Parent definitions seeded by the admin surface
        let definitions = r#"
            CREATE TABLE IF NOT EXISTS slots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                programme_name TEXT NOT NULL,
                plan_type_id INTEGER NOT NULL,
                slot_from INTEGER NOT NULL,
                slot_to INTEGER NOT NULL
            )
        "#;

        // One row per bookable unit; the timestamp is the unique key
        let units = r#"
            CREATE TABLE IF NOT EXISTS time_slots (
                slot_ts INTEGER PRIMARY KEY,
                status TEXT NOT NULL DEFAULT 'AVAILABLE',
                user_id INTEGER,
                slot_id INTEGER NOT NULL
            )
        "#;

        self.db_client.execute(definitions).await?;
        self.db_client.execute(units).await?;

        info!("Time slot schema initialized successfully");
        Ok(())
    }

    async fn find_available_in_range(
        &self,
        from_ts: i64,
        to_ts: i64,
    ) -> Result<Vec<TimeSlot>, DbError> {
        debug!("Finding available units in range [{}, {}]", from_ts, to_ts);

        let query = r#"
            SELECT slot_ts, status, user_id, slot_id
            FROM time_slots
            WHERE status = $1 AND slot_ts BETWEEN $2 AND $3
            ORDER BY slot_ts ASC
        "#;

        let rows = sqlx::query(query)
            .bind(SlotStatus::Available.as_str())
            .bind(from_ts)
            .bind(to_ts)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to query available units: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(Self::row_to_time_slot).collect()
    }

    async fn mark_range_booked(
        &self,
        from_ts: i64,
        to_ts: i64,
        expected_count: u64,
        user_id: i64,
    ) -> Result<u64, DbError> {
        debug!(
            "Claiming units in range [{}, {}] for user {} (expecting {})",
            from_ts, to_ts, user_id, expected_count
        );

        let mut tx = self.db_client.begin().await?;

        // The status predicate re-checks availability atomically, so a unit
        // claimed by a concurrent transaction is simply not counted here.
        let query = r#"
            UPDATE time_slots
            SET status = $1, user_id = $2
            WHERE status = $3 AND slot_ts BETWEEN $4 AND $5
        "#;

        let claimed = sqlx::query(query)
            .bind(SlotStatus::Booked.as_str())
            .bind(user_id)
            .bind(SlotStatus::Available.as_str())
            .bind(from_ts)
            .bind(to_ts)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to claim units: {}", e);
                DbError::QueryError(e.to_string())
            })?
            .rows_affected();

        if claimed == expected_count {
            tx.commit()
                .await
                .map_err(|e| DbError::TransactionError(e.to_string()))?;
            info!(
                "Booked {} units in range [{}, {}] for user {}",
                claimed, from_ts, to_ts, user_id
            );
        } else {
            tx.rollback()
                .await
                .map_err(|e| DbError::TransactionError(e.to_string()))?;
            warn!(
                "Rolled back booking for range [{}, {}]: claimed {} of {} expected units",
                from_ts, to_ts, claimed, expected_count
            );
        }

        Ok(claimed)
    }

    async fn create_definition(
        &self,
        definition: NewSlotDefinition,
        granularity_seconds: i64,
    ) -> Result<Option<SlotDefinition>, DbError> {
        if granularity_seconds <= 0 {
            return Err(DbError::Other(
                "granularity must be a positive number of seconds".to_string(),
            ));
        }

        debug!(
            "Seeding definition '{}' over [{}, {}] at {}s granularity",
            definition.programme_name,
            definition.slot_from_ts,
            definition.slot_to_ts,
            granularity_seconds
        );

        let mut tx = self.db_client.begin().await?;

        // Seeded timestamps are immutable, so a colliding range refuses the
        // whole request rather than re-seeding part of it.
        let overlap_query = r#"
            SELECT COUNT(*) AS unit_count
            FROM time_slots
            WHERE slot_ts BETWEEN $1 AND $2
        "#;

        let overlap_row = sqlx::query(overlap_query)
            .bind(definition.slot_from_ts)
            .bind(definition.slot_to_ts)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to check for seeded units: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let existing: i64 = overlap_row.try_get("unit_count")?;
        if existing > 0 {
            tx.rollback()
                .await
                .map_err(|e| DbError::TransactionError(e.to_string()))?;
            warn!(
                "Refusing to seed range [{}, {}]: {} units already exist",
                definition.slot_from_ts, definition.slot_to_ts, existing
            );
            return Ok(None);
        }

        let insert_definition = r#"
            INSERT INTO slots (programme_name, plan_type_id, slot_from, slot_to)
            VALUES ($1, $2, $3, $4)
            RETURNING id
        "#;

        let row = sqlx::query(insert_definition)
            .bind(&definition.programme_name)
            .bind(definition.plan_type_id)
            .bind(definition.slot_from_ts)
            .bind(definition.slot_to_ts)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!("Failed to insert slot definition: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let definition_id: i64 = row.try_get("id")?;

        let insert_unit = r#"
            INSERT INTO time_slots (slot_ts, status, user_id, slot_id)
            VALUES ($1, $2, NULL, $3)
        "#;

        let mut ts = definition.slot_from_ts;
        let mut seeded: u64 = 0;
        while ts <= definition.slot_to_ts {
            sqlx::query(insert_unit)
                .bind(ts)
                .bind(SlotStatus::Available.as_str())
                .bind(definition_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!("Failed to seed unit at {}: {}", ts, e);
                    DbError::QueryError(e.to_string())
                })?;
            seeded += 1;
            ts += granularity_seconds;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!(
            "Seeded definition {} ('{}') with {} units",
            definition_id, definition.programme_name, seeded
        );

        Ok(Some(SlotDefinition {
            id: definition_id,
            programme_name: definition.programme_name,
            plan_type_id: definition.plan_type_id,
            slot_from_ts: definition.slot_from_ts,
            slot_to_ts: definition.slot_to_ts,
        }))
    }

    async fn find_definitions(&self) -> Result<Vec<SlotDefinition>, DbError> {
        debug!("Listing slot definitions");

        let query = r#"
            SELECT id, programme_name, plan_type_id, slot_from, slot_to
            FROM slots
            ORDER BY slot_from ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list slot definitions: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(Self::row_to_definition).collect()
    }
}
