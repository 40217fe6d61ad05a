// File: crates/airtime_slots/src/handlers.rs
use crate::logic::{
    available_units, book_range, create_definition, format_ts, list_definitions,
    parse_rfc3339_ts, AvailabilityQuery, AvailableSlotsResponse, AvailableUnit, BookSlotRequest,
    BookingError, BookingResponse, CreateSlotRequest, SlotDefinitionView, SlotDefinitionsResponse,
};
use airtime_common::error_response;
use airtime_config::AppConfig;
use airtime_db::{NewSlotDefinition, SlotDefinition, SqlTimeSlotRepository};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

// Define shared state needed by the slot handlers
#[derive(Clone)]
pub struct SlotsState {
    pub config: Arc<AppConfig>,
    pub time_slot_repo: SqlTimeSlotRepository,
}

impl SlotsState {
    fn granularity_seconds(&self) -> i64 {
        i64::from(self.config.booking.granularity_seconds)
    }
}

fn definition_view(definition: &SlotDefinition) -> SlotDefinitionView {
    SlotDefinitionView {
        id: definition.id,
        programme_name: definition.programme_name.clone(),
        plan_type_id: definition.plan_type_id,
        slot_from_date_time: format_ts(definition.slot_from_ts),
        slot_to_date_time: format_ts(definition.slot_to_ts),
    }
}

/// Handler to list available airtime units in a range.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots/availability", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Available units in the range", body = AvailableSlotsResponse),
        (status = 400, description = "Bad request (invalid timestamp or inverted range)"),
        (status = 500, description = "Internal error")
    ),
    tag = "Slots"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<SlotsState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, (StatusCode, String)> {
    let from_ts = parse_rfc3339_ts(&query.from).map_err(|e| error_response(&e))?;
    let to_ts = parse_rfc3339_ts(&query.to).map_err(|e| error_response(&e))?;

    match available_units(&state.time_slot_repo, from_ts, to_ts).await {
        Ok(units) => Ok(Json(AvailableSlotsResponse {
            slots: units
                .iter()
                .map(|unit| AvailableUnit {
                    slot_time: format_ts(unit.slot_ts),
                    slot_id: unit.slot_id,
                })
                .collect(),
        })),
        Err(e @ BookingError::InvalidRange(_)) => Err(error_response(&e)),
        Err(e) => {
            error!("Availability lookup failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to query slot availability.".to_string(),
            ))
        }
    }
}

/// Handler to book a range of airtime units.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/slots/book",
    request_body = BookSlotRequest,
    responses(
        (status = 200, description = "Booking receipt", body = BookingResponse),
        (status = 400, description = "Invalid timestamp or inverted range"),
        (status = 409, description = "Requested range is not fully available"),
        (status = 500, description = "Internal error")
    ),
    tag = "Slots"
))]
pub async fn book_slot_handler(
    State(state): State<Arc<SlotsState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    let from_ts = parse_rfc3339_ts(&payload.from_date_time).map_err(|e| error_response(&e))?;
    let to_ts = parse_rfc3339_ts(&payload.to_date_time).map_err(|e| error_response(&e))?;

    info!(
        "Booking request from user {} for programme {:?} (plan type {})",
        payload.user_id, payload.programme_name, payload.plan_type_id
    );

    match book_range(
        &state.time_slot_repo,
        state.granularity_seconds(),
        payload.user_id,
        from_ts,
        to_ts,
    )
    .await
    {
        Ok(receipt) => Ok(Json(BookingResponse {
            success: true,
            booking_reference: receipt.booking_reference,
            booked_units: receipt.booked_units,
            from_date_time: payload.from_date_time,
            to_date_time: payload.to_date_time,
            message: "Airtime booked successfully.".to_string(),
        })),
        Err(e @ BookingError::InvalidRange(_)) => Err(error_response(&e)),
        Err(e @ BookingError::SlotNotAvailable) => Err(error_response(&e)),
        Err(e) => {
            error!("Booking failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to book airtime.".to_string(),
            ))
        }
    }
}

/// Handler to seed a slot definition and its bookable units.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/admin/slots",
    request_body = CreateSlotRequest,
    responses(
        (status = 200, description = "Created definition", body = SlotDefinitionView),
        (status = 400, description = "Invalid timestamp or inverted range"),
        (status = 409, description = "Range overlaps already seeded units"),
        (status = 500, description = "Internal error")
    ),
    tag = "Slots"
))]
pub async fn create_slot_handler(
    State(state): State<Arc<SlotsState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<Json<SlotDefinitionView>, (StatusCode, String)> {
    let slot_from_ts =
        parse_rfc3339_ts(&payload.slot_from_date_time).map_err(|e| error_response(&e))?;
    let slot_to_ts =
        parse_rfc3339_ts(&payload.slot_to_date_time).map_err(|e| error_response(&e))?;

    match create_definition(
        &state.time_slot_repo,
        state.granularity_seconds(),
        NewSlotDefinition {
            programme_name: payload.programme_name,
            plan_type_id: payload.plan_type_id,
            slot_from_ts,
            slot_to_ts,
        },
    )
    .await
    {
        Ok(definition) => Ok(Json(definition_view(&definition))),
        Err(e @ BookingError::InvalidRange(_)) => Err(error_response(&e)),
        Err(e @ BookingError::Overlap) => Err(error_response(&e)),
        Err(e) => {
            error!("Slot seeding failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create slot definition.".to_string(),
            ))
        }
    }
}

/// Handler to list seeded slot definitions.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/admin/slots",
    responses(
        (status = 200, description = "All seeded slot definitions", body = SlotDefinitionsResponse),
        (status = 500, description = "Internal error")
    ),
    tag = "Slots"
))]
pub async fn list_slots_handler(
    State(state): State<Arc<SlotsState>>,
) -> Result<Json<SlotDefinitionsResponse>, (StatusCode, String)> {
    match list_definitions(&state.time_slot_repo).await {
        Ok(definitions) => Ok(Json(SlotDefinitionsResponse {
            definitions: definitions.iter().map(definition_view).collect(),
        })),
        Err(e) => {
            error!("Listing slot definitions failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list slot definitions.".to_string(),
            ))
        }
    }
}
