//! HTTP API layer

mod routes;
mod handlers;

pub use handlers::{
    ApiError, ErrorResponse, MessageResponse, GREETING_MESSAGE, HEALTHY_MESSAGE, SIGNUP_MESSAGE,
};
pub use routes::{create_router, ApiDoc, AppState};
