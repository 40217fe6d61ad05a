// File: crates/airtime_auth/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{LoginRequest, LoginResponse};

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(content = LoginRequest, example = json!({
        "phone_number": "5550100",
        "password": "hunter2"
    })),
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse,
         example = json!({
             "user_id": 5,
             "name": "Asha Rao",
             "role": "SALES_PERSON"
         })
        ),
        (status = 401, description = "Unknown phone number or wrong password",
         example = json!("Invalid login credentials")
        ),
        (status = 500, description = "Login could not be processed",
         example = json!("Failed to process login.")
        )
    )
)]
fn doc_login_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_login_handler),
    components(schemas(LoginRequest, LoginResponse)),
    tags(
        (name = "auth", description = "Session verification API")
    ),
    servers(
        (url = "/api", description = "Auth API server")
    )
)]
pub struct AuthApiDoc;
