// File: crates/airtime_auth/src/handlers.rs
use crate::logic::{authenticate, AuthError, LoginRequest, LoginResponse};
use airtime_common::error_response;
use airtime_db::SqlUserRepository;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::error;

// Define shared state needed by the auth handlers
#[derive(Clone)]
pub struct AuthState {
    pub user_repo: SqlUserRepository,
}

/// Handler to verify login credentials.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/login", // Path relative to /api
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Unknown phone number or wrong password"),
        (status = 500, description = "Internal error")
    ),
    tag = "Auth"
))]
pub async fn login_handler(
    State(state): State<Arc<AuthState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    match authenticate(&state.user_repo, &payload.phone_number, &payload.password).await {
        Ok(user) => Ok(Json(LoginResponse {
            user_id: user.user_id,
            name: user.name,
            role: user.role,
        })),
        Err(e @ AuthError::InvalidCredentials) => Err(error_response(&e)),
        Err(e) => {
            error!("Login failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process login.".to_string(),
            ))
        }
    }
}
