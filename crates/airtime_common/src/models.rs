// --- File: crates/airtime_common/src/models.rs ---

// This file contains data structures that are shared across the application.

use serde::{Deserialize, Serialize};

/// Response body of the health endpoint.
///
/// `database` reports whether the backing store answered a probe query,
/// so deployments can distinguish a live process from a usable service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthStatus {
    /// Overall process status, always "ok" when the handler answers
    pub status: String,

    /// "reachable" or "unreachable" depending on a database probe
    pub database: String,

    /// Version of the running binary
    pub version: String,
}

impl HealthStatus {
    /// Build a health report from the outcome of a database probe.
    pub fn new(database_reachable: bool, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            database: if database_reachable {
                "reachable".to_string()
            } else {
                "unreachable".to_string()
            },
            version: version.to_string(),
        }
    }
}
