// --- File: crates/airtime_slots/src/logic.rs ---
use airtime_common::HttpStatusCode;
use airtime_db::{NewSlotDefinition, SlotDefinition, TimeSlot, TimeSlotRepository};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Requested slot range is not available")]
    SlotNotAvailable,
    #[error("Range overlaps units that are already seeded")]
    Overlap,
    #[error("Storage error: {0}")]
    Storage(#[from] airtime_db::DbError),
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::InvalidRange(_) => 400,
            BookingError::SlotNotAvailable => 409,
            BookingError::Overlap => 409,
            BookingError::Storage(_) => 500,
        }
    }
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Range start in RFC 3339 format
    #[cfg_attr(
        feature = "openapi",
        schema(format = "date-time", example = "2025-06-01T10:00:00Z")
    )]
    pub from: String,

    /// Range end in RFC 3339 format, inclusive
    #[cfg_attr(
        feature = "openapi",
        schema(format = "date-time", example = "2025-06-01T10:00:10Z")
    )]
    pub to: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AvailableSlotsResponse {
    pub slots: Vec<AvailableUnit>,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AvailableUnit {
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-01T10:00:00+00:00"))]
    pub slot_time: String, // RFC 3339 format
    /// The definition this unit was seeded under
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub slot_id: i64,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = 5))]
    pub user_id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-01T10:00:00Z"))]
    pub from_date_time: String, // RFC 3339 format string
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-01T10:00:05Z"))]
    pub to_date_time: String, // RFC 3339 format string
    /// Pass-through bookkeeping, not consumed by the booking algorithm
    #[cfg_attr(feature = "openapi", schema(example = "Morning Drive"))]
    pub programme_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub plan_type_id: i64,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    #[cfg_attr(
        feature = "openapi",
        schema(example = "77a41dcd-7b24-4f4b-a57e-68c76d1d2e03")
    )]
    pub booking_reference: String,
    #[cfg_attr(feature = "openapi", schema(example = 6))]
    pub booked_units: u64,
    pub from_date_time: String,
    pub to_date_time: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Morning Drive"))]
    pub programme_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub plan_type_id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-01T10:00:00Z"))]
    pub slot_from_date_time: String, // RFC 3339 format string
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-01T10:00:10Z"))]
    pub slot_to_date_time: String, // RFC 3339 format string
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SlotDefinitionView {
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Morning Drive"))]
    pub programme_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub plan_type_id: i64,
    pub slot_from_date_time: String,
    pub slot_to_date_time: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SlotDefinitionsResponse {
    pub definitions: Vec<SlotDefinitionView>,
}

/// Receipt for a committed booking.
#[derive(Debug, Clone)]
pub struct BookingReceipt {
    pub booking_reference: String,
    pub booked_units: u64,
    pub from_ts: i64,
    pub to_ts: i64,
}

// --- Timestamp Handling ---

/// Parses an RFC 3339 timestamp into unix seconds.
pub fn parse_rfc3339_ts(value: &str) -> Result<i64, BookingError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp())
        .map_err(|e| BookingError::InvalidRange(format!("invalid timestamp '{value}': {e}")))
}

/// Renders unix seconds as an RFC 3339 UTC timestamp.
pub fn format_ts(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.to_rfc3339(),
        None => ts.to_string(),
    }
}

// --- Booking Logic ---

/// Number of discrete units a closed range spans at the given granularity.
///
/// Computed analytically, never from the store, so a gap in seeded units
/// surfaces as a count mismatch instead of a silent partial booking.
/// A non-positive granularity is `InvalidRange`.
pub fn expected_unit_count(
    from_ts: i64,
    to_ts: i64,
    granularity_seconds: i64,
) -> Result<u64, BookingError> {
    if granularity_seconds <= 0 {
        return Err(BookingError::InvalidRange(format!(
            "granularity must be positive, got {granularity_seconds}"
        )));
    }
    Ok(((to_ts - from_ts) / granularity_seconds + 1) as u64)
}

/// Books every unit in the closed range `[from_ts, to_ts]` for `user_id`.
///
/// All-or-nothing: the booking succeeds only when every unit the range
/// spans is available, and commits only when the conditional update claims
/// exactly that many rows. A shortfall at either point, including one caused
/// by a concurrent booking between the availability check and the update,
/// yields `SlotNotAvailable` and leaves the store untouched.
pub async fn book_range<R: TimeSlotRepository>(
    repo: &R,
    granularity_seconds: i64,
    user_id: i64,
    from_ts: i64,
    to_ts: i64,
) -> Result<BookingReceipt, BookingError> {
    if from_ts > to_ts {
        return Err(BookingError::InvalidRange(format!(
            "from ({from_ts}) is after to ({to_ts})"
        )));
    }

    let expected = expected_unit_count(from_ts, to_ts, granularity_seconds)?;

    let available = repo.find_available_in_range(from_ts, to_ts).await?;
    let actual = available.len() as u64;
    if actual != expected {
        debug!(
            "Booking rejected for user {}: {} of {} units available in [{}, {}]",
            user_id, actual, expected, from_ts, to_ts
        );
        return Err(BookingError::SlotNotAvailable);
    }

    let claimed = repo
        .mark_range_booked(from_ts, to_ts, expected, user_id)
        .await?;
    if claimed != expected {
        // A concurrent booking claimed part of the range between the check
        // and the update; the store rolled the transaction back.
        debug!(
            "Booking lost a race for user {}: claimed {} of {} units in [{}, {}]",
            user_id, claimed, expected, from_ts, to_ts
        );
        return Err(BookingError::SlotNotAvailable);
    }

    let receipt = BookingReceipt {
        booking_reference: Uuid::new_v4().to_string(),
        booked_units: claimed,
        from_ts,
        to_ts,
    };
    info!(
        "User {} booked {} units in [{}, {}], reference {}",
        user_id, claimed, from_ts, to_ts, receipt.booking_reference
    );
    Ok(receipt)
}

// --- Availability Logic ---

/// Lists every available unit in the closed range, ascending by timestamp.
pub async fn available_units<R: TimeSlotRepository>(
    repo: &R,
    from_ts: i64,
    to_ts: i64,
) -> Result<Vec<TimeSlot>, BookingError> {
    if from_ts > to_ts {
        return Err(BookingError::InvalidRange(format!(
            "from ({from_ts}) is after to ({to_ts})"
        )));
    }
    Ok(repo.find_available_in_range(from_ts, to_ts).await?)
}

// --- Seeding Logic ---

/// Seeds a slot definition and one available unit per granularity step.
///
/// Unit timestamps are immutable once seeded, so a range that collides with
/// existing units is refused whole.
pub async fn create_definition<R: TimeSlotRepository>(
    repo: &R,
    granularity_seconds: i64,
    request: NewSlotDefinition,
) -> Result<SlotDefinition, BookingError> {
    if request.slot_from_ts > request.slot_to_ts {
        return Err(BookingError::InvalidRange(format!(
            "slot_from ({}) is after slot_to ({})",
            request.slot_from_ts, request.slot_to_ts
        )));
    }
    if granularity_seconds <= 0 {
        return Err(BookingError::InvalidRange(format!(
            "granularity must be positive, got {granularity_seconds}"
        )));
    }

    match repo.create_definition(request, granularity_seconds).await? {
        Some(definition) => {
            info!(
                "Seeded definition {} for programme {:?} over [{}, {}]",
                definition.id,
                definition.programme_name,
                definition.slot_from_ts,
                definition.slot_to_ts
            );
            Ok(definition)
        }
        None => Err(BookingError::Overlap),
    }
}

/// Lists all seeded definitions, ascending by their starting time.
pub async fn list_definitions<R: TimeSlotRepository>(
    repo: &R,
) -> Result<Vec<SlotDefinition>, BookingError> {
    Ok(repo.find_definitions().await?)
}
