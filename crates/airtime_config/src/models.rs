// --- File: crates/airtime_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via AIRTIME__DATABASE__URL or DATABASE_URL
}

// --- Booking Config ---
// Controls how a requested interval is split into bookable time units.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// Width of one bookable time unit in seconds. Seeding and the
    /// expected-unit count both derive from this value.
    #[serde(default = "default_granularity_seconds")]
    pub granularity_seconds: u32,
}

fn default_granularity_seconds() -> u32 {
    1
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            granularity_seconds: default_granularity_seconds(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_swagger_ui: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>, // Central DB config

    #[serde(default)]
    pub booking: BookingConfig,
}
