//! Test fixtures for booking flow tests
//!
//! Each test runs against its own SQLite database file so the full stack,
//! router included, exercises the same repository code as production.
//! In-memory SQLite would give every pooled connection a private database.

use airtime_config::{AppConfig, BookingConfig, ServerConfig};
use airtime_db::{DbClient, NewSlotDefinition, SqlTimeSlotRepository, TimeSlotRepository};
use airtime_slots::routes::routes;
use axum::Router;
use std::sync::Arc;

/// Opens a fresh database and returns a schema-initialized repository.
pub async fn fresh_repo() -> SqlTimeSlotRepository {
    let path =
        std::env::temp_dir().join(format!("airtime_slots_test_{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    let db_client = DbClient::from_url(&url)
        .await
        .expect("failed to open test database");
    let repo = SqlTimeSlotRepository::new(db_client);
    repo.init_schema().await.expect("failed to create schema");
    repo
}

/// Seeds one definition covering `[from_ts, to_ts]` at one-second granularity.
pub async fn seed_range(repo: &SqlTimeSlotRepository, from_ts: i64, to_ts: i64) {
    repo.create_definition(
        NewSlotDefinition {
            programme_name: "Morning Drive".to_string(),
            plan_type_id: 2,
            slot_from_ts: from_ts,
            slot_to_ts: to_ts,
        },
        1,
    )
    .await
    .expect("failed to seed definition")
    .expect("seed range overlapped existing units");
}

/// Creates a test AppConfig with one-second booking granularity.
pub fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
        },
        use_swagger_ui: false,
        database: None,
        booking: BookingConfig {
            granularity_seconds: 1,
        },
    })
}

/// Builds the slot router over a fresh database.
pub async fn fresh_app() -> Router {
    routes(test_config(), fresh_repo().await)
}
