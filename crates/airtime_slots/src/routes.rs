// --- File: crates/airtime_slots/src/routes.rs ---

use crate::handlers::{
    book_slot_handler, create_slot_handler, get_availability_handler, list_slots_handler,
    SlotsState,
};
use airtime_config::AppConfig;
use airtime_db::SqlTimeSlotRepository;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the slot booking feature.
pub fn routes(config: Arc<AppConfig>, time_slot_repo: SqlTimeSlotRepository) -> Router {
    let slots_state = Arc::new(SlotsState {
        config,
        time_slot_repo,
    });

    Router::new()
        .route("/slots/availability", get(get_availability_handler))
        .route("/slots/book", post(book_slot_handler))
        .route(
            "/admin/slots",
            post(create_slot_handler).get(list_slots_handler),
        )
        .with_state(slots_state)
}
