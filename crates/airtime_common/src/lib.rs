// --- File: crates/airtime_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Shared data structures

// Re-export error types and utilities for easier access
pub use error::{error_response, AirtimeError, HttpStatusCode};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_result};
