// File: crates/airtime_slots/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AvailabilityQuery, AvailableSlotsResponse, AvailableUnit, BookSlotRequest, BookingResponse,
    CreateSlotRequest, SlotDefinitionView, SlotDefinitionsResponse,
};

#[utoipa::path(
    get,
    path = "/slots/availability",
    params(
        ("from" = String, Query, description = "Range start in RFC 3339 format", example = "2025-06-01T10:00:00Z", format = "date-time"),
        ("to" = String, Query, description = "Range end in RFC 3339 format, inclusive", example = "2025-06-01T10:00:10Z", format = "date-time")
    ),
    responses(
        (status = 200, description = "Available units in the range", body = AvailableSlotsResponse,
         example = json!({
             "slots": [
                 {"slot_time": "2025-06-01T10:00:00+00:00", "slot_id": 3},
                 {"slot_time": "2025-06-01T10:00:01+00:00", "slot_id": 3}
             ]
         })
        ),
        (status = 400, description = "Invalid timestamp or inverted range",
         example = json!("Invalid range: from (20) is after to (10)")
        ),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/slots/book",
    request_body(content = BookSlotRequest, example = json!({
        "user_id": 5,
        "from_date_time": "2025-06-01T10:00:00Z",
        "to_date_time": "2025-06-01T10:00:05Z",
        "programme_name": "Morning Drive",
        "plan_type_id": 2
    })),
    responses(
        (status = 200, description = "Booking receipt", body = BookingResponse,
         example = json!({
             "success": true,
             "booking_reference": "77a41dcd-7b24-4f4b-a57e-68c76d1d2e03",
             "booked_units": 6,
             "from_date_time": "2025-06-01T10:00:00Z",
             "to_date_time": "2025-06-01T10:00:05Z",
             "message": "Airtime booked successfully."
         })
        ),
        (status = 400, description = "Invalid timestamp or inverted range",
         example = json!("Invalid range: from (20) is after to (10)")
        ),
        (status = 409, description = "Range not fully available",
         example = json!("Requested slot range is not available")
        ),
        (status = 500, description = "Booking failed",
         example = json!("Failed to book airtime.")
        )
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    post,
    path = "/admin/slots",
    request_body(content = CreateSlotRequest, example = json!({
        "programme_name": "Morning Drive",
        "plan_type_id": 2,
        "slot_from_date_time": "2025-06-01T10:00:00Z",
        "slot_to_date_time": "2025-06-01T10:00:10Z"
    })),
    responses(
        (status = 200, description = "Created definition", body = SlotDefinitionView,
         example = json!({
             "id": 3,
             "programme_name": "Morning Drive",
             "plan_type_id": 2,
             "slot_from_date_time": "2025-06-01T10:00:00+00:00",
             "slot_to_date_time": "2025-06-01T10:00:10+00:00"
         })
        ),
        (status = 400, description = "Invalid timestamp or inverted range"),
        (status = 409, description = "Range overlaps already seeded units",
         example = json!("Range overlaps units that are already seeded")
        ),
        (status = 500, description = "Seeding failed")
    )
)]
fn doc_create_slot_handler() {}

#[utoipa::path(
    get,
    path = "/admin/slots",
    responses(
        (status = 200, description = "All seeded slot definitions", body = SlotDefinitionsResponse,
         example = json!({
             "definitions": [
                 {
                     "id": 3,
                     "programme_name": "Morning Drive",
                     "plan_type_id": 2,
                     "slot_from_date_time": "2025-06-01T10:00:00+00:00",
                     "slot_to_date_time": "2025-06-01T10:00:10+00:00"
                 }
             ]
         })
        ),
        (status = 500, description = "Listing failed")
    )
)]
fn doc_list_slots_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_book_slot_handler,
        doc_create_slot_handler,
        doc_list_slots_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailableSlotsResponse,
            AvailableUnit,
            BookSlotRequest,
            BookingResponse,
            CreateSlotRequest,
            SlotDefinitionView,
            SlotDefinitionsResponse
        )
    ),
    tags(
        (name = "slots", description = "Broadcast airtime booking API")
    ),
    servers(
        (url = "/api", description = "Airtime API server")
    )
)]
pub struct SlotsApiDoc;
