//! API route definitions

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{self, ErrorResponse, MessageResponse};
use crate::store::UserStore;
use crate::types::SignupRequest;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "signup-api",
        version = "0.1.0",
        description = "Static greeting routes and a user signup endpoint"
    ),
    tags(
        (name = "health", description = "Health checks"),
        (name = "greeting", description = "Static greetings"),
        (name = "users", description = "User signup")
    ),
    paths(
        handlers::health,
        handlers::greet,
        handlers::greet_new,
        handlers::signup,
    ),
    components(schemas(
        MessageResponse,
        ErrorResponse,
        SignupRequest,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

/// Create the API router
///
/// Requests running longer than `request_timeout` are answered with a JSON 408.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and signup share the root path
        .route("/", get(handlers::health))
        .route("/", post(handlers::signup))

        // Greetings
        .route("/get", get(handlers::greet))
        .route("/get/new", get(handlers::greet_new))

        // OpenAPI document
        .route("/openapi.json", get(openapi_json))

        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(middleware::map_response(handlers::json_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
