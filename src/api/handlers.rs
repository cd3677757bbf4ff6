//! API request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::routes::AppState;
use crate::error::Error;
use crate::types::SignupRequest;

pub const HEALTHY_MESSAGE: &str = "Healthy server";
pub const GREETING_MESSAGE: &str = "Hello Broo";
pub const SIGNUP_MESSAGE: &str = "Done signing up!";

// Response types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error kind, e.g. `VALIDATION_ERROR`
    pub error: String,
    /// Human-readable description
    pub message: String,
}

/// Error returned from handlers, rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::EmailTaken(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Server-side details stay in the logs
        let message = if err.is_client_error() {
            err.to_string()
        } else {
            tracing::error!("Request failed: {}", err);
            "Internal server error".to_string()
        };

        Self {
            status,
            body: ErrorResponse {
                error: err.kind().to_string(),
                message,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            body: ErrorResponse {
                error: "INVALID_BODY".to_string(),
                message: rejection.body_text(),
            },
        }
    }
}

impl ApiError {
    fn request_timeout() -> Self {
        Self {
            status: StatusCode::REQUEST_TIMEOUT,
            body: ErrorResponse {
                error: "REQUEST_TIMEOUT".to_string(),
                message: "Request took too long to complete".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Give the bare 408 produced by the timeout layer an [`ErrorResponse`] body
pub async fn json_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        tracing::warn!("Request timed out");
        return ApiError::request_timeout().into_response();
    }
    response
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is healthy", body = MessageResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<MessageResponse> {
    MessageResponse::json(HEALTHY_MESSAGE)
}

/// Static greeting
#[utoipa::path(
    get,
    path = "/get",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "greeting"
)]
pub async fn greet() -> Json<MessageResponse> {
    MessageResponse::json(GREETING_MESSAGE)
}

/// Static greeting, separately addressable from `/get`
#[utoipa::path(
    get,
    path = "/get/new",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "greeting"
)]
pub async fn greet_new() -> Json<MessageResponse> {
    MessageResponse::json(GREETING_MESSAGE)
}

/// Sign up a new user
#[utoipa::path(
    post,
    path = "/",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorResponse),
        (status = 408, description = "Request timed out", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;

    let new_user = req.validate().map_err(|e| {
        tracing::debug!("Rejected signup: {}", e);
        e
    })?;

    let user_id = state.users.create_user(new_user).await?;
    tracing::info!(user_id = %user_id, "User signed up");

    Ok(MessageResponse::json(SIGNUP_MESSAGE))
}
