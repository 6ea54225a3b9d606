use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::{ErrorResponse, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(messages::NOT_FOUND_RESOURCE));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse::new(messages::METHOD_NOT_ALLOWED));

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}

/// Turns a caught handler panic into a 500 JSON response.
///
/// Plugged into `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Recovered from panic in request handler");

    let body = Json(ErrorResponse::new(messages::PANIC_RECOVERED));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
