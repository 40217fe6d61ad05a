// File: services/airtime_backend/src/main.rs
mod app_state;
mod service_factory;

use airtime_auth::routes as auth_routes;
use airtime_common::models::HealthStatus;
use airtime_config::load_config;
use airtime_slots::routes as slots_routes;
use app_state::AppState;
use axum::{extract::State, response::Json, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[axum::debug_handler]
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let database_reachable = state.db_client().is_healthy().await;
    Json(HealthStatus::new(
        database_reachable,
        env!("CARGO_PKG_VERSION"),
    ))
}

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    airtime_common::logging::init();

    let app_state = Arc::new(
        AppState::new(config.clone())
            .await
            .expect("Failed to initialize storage services"),
    );

    let core_router = Router::new()
        .route("/", get(|| async { "Welcome to Airtime-RS API!" }))
        .route("/health", get(health_handler))
        .with_state(app_state.clone());

    let auth_router = auth_routes::routes(app_state.user_repo());
    let slots_router = slots_routes::routes(config.clone(), app_state.time_slot_repo());

    let api_router =
        Router::new().nest("/api", core_router.merge(auth_router).merge(slots_router));

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = api_router.layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use airtime_auth::doc::AuthApiDoc;
        use airtime_slots::doc::SlotsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Airtime API",
                version = "0.1.0",
                description = "Broadcast airtime slot booking API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Airtime", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        if config.use_swagger_ui {
            // Create the merged OpenAPI document
            let mut openapi_doc = ApiDoc::openapi();
            openapi_doc.merge(AuthApiDoc::openapi());
            openapi_doc.merge(SlotsApiDoc::openapi());
            println!("📖 Adding Swagger UI at /api/docs");

            // Create the Swagger UI route, referencing the merged doc
            let swagger_ui =
                SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
            app = app.merge(swagger_ui);
        }
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
