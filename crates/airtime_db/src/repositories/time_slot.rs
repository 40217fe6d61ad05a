//! Repository for broadcast time slots
//!
//! This module defines the store of discrete airtime units. Every bookable
//! second (or coarser unit, depending on the configured granularity) is one
//! row keyed by its timestamp, plus a parent definition row describing the
//! programme the units were seeded for.

use crate::error::DbError;

/// Booking state of a single time unit.
///
/// A unit is never partially booked; it is either fully available or fully
/// claimed by one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Available,
    Booked,
}

impl SlotStatus {
    /// The column value this status is stored as.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Booked => "BOOKED",
        }
    }

    /// Parse a stored column value back into a status.
    pub fn parse(value: &str) -> Result<Self, DbError> {
        match value {
            "AVAILABLE" => Ok(SlotStatus::Available),
            "BOOKED" => Ok(SlotStatus::Booked),
            other => Err(DbError::Other(format!("unknown slot status: {other}"))),
        }
    }
}

/// One discrete airtime unit.
///
/// Timestamps are stored as UTC unix seconds; `DateTime` does not decode
/// through `sqlx::Any`, and integer keys keep the range predicates portable
/// across the supported backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Unix timestamp of the unit, the unique key
    pub slot_ts: i64,
    /// Booking state of the unit
    pub status: SlotStatus,
    /// Booking user, set iff the unit is booked
    pub user_id: Option<i64>,
    /// The definition this unit was seeded under
    pub slot_id: i64,
}

/// Programme-level definition a batch of units was seeded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDefinition {
    pub id: i64,
    pub programme_name: String,
    pub plan_type_id: i64,
    /// First seeded unit, unix seconds
    pub slot_from_ts: i64,
    /// Last seeded unit, unix seconds
    pub slot_to_ts: i64,
}

/// Input for seeding a new slot definition and its units.
#[derive(Debug, Clone)]
pub struct NewSlotDefinition {
    pub programme_name: String,
    pub plan_type_id: i64,
    pub slot_from_ts: i64,
    pub slot_to_ts: i64,
}

/// Repository for time slots
///
/// This trait defines the interface the booking engine books against. All
/// range parameters are closed intervals of unix seconds.
pub trait TimeSlotRepository {
    /// Initialize the database schema
    ///
    /// Creates the time unit and slot definition tables if they don't
    /// already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Find every available unit in `[from_ts, to_ts]`, ordered by
    /// timestamp ascending.
    fn find_available_in_range(
        &self,
        from_ts: i64,
        to_ts: i64,
    ) -> impl std::future::Future<Output = Result<Vec<TimeSlot>, DbError>> + Send;

    /// Atomically claim every available unit in `[from_ts, to_ts]` for
    /// `user_id`.
    ///
    /// The transition runs as one conditional update inside a transaction.
    /// The transaction commits only when the number of claimed rows equals
    /// `expected_count`; on any shortfall (a concurrent booking got there
    /// first, or units were never seeded) it rolls back, leaving every unit
    /// in its prior state.
    ///
    /// # Returns
    ///
    /// The number of rows the update claimed, whether or not it committed.
    /// Callers compare it against `expected_count` to detect the rollback.
    fn mark_range_booked(
        &self,
        from_ts: i64,
        to_ts: i64,
        expected_count: u64,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<u64, DbError>> + Send;

    /// Seed a new slot definition and one available unit per granularity
    /// step over its range, in a single transaction.
    ///
    /// # Returns
    ///
    /// The created definition, or `None` when the range collides with
    /// already seeded units (timestamps are immutable once created, so the
    /// whole request is refused).
    fn create_definition(
        &self,
        definition: NewSlotDefinition,
        granularity_seconds: i64,
    ) -> impl std::future::Future<Output = Result<Option<SlotDefinition>, DbError>> + Send;

    /// List all seeded slot definitions, ordered by their starting time.
    fn find_definitions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<SlotDefinition>, DbError>> + Send;
}
