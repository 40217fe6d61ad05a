// --- File: crates/airtime_auth/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
