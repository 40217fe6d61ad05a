// --- File: crates/airtime_auth/src/routes.rs ---

use crate::handlers::{login_handler, AuthState};
use airtime_db::SqlUserRepository;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing all routes for the session verification feature.
pub fn routes(user_repo: SqlUserRepository) -> Router {
    let auth_state = Arc::new(AuthState { user_repo });

    Router::new()
        .route("/auth/login", post(login_handler))
        .with_state(auth_state)
}
