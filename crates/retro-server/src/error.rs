//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Wire shape of a failed response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: &'static str,
}

/// A request failure, carrying only a static human-readable message.
///
/// Every failure maps to a 500; the cause is logged at the handler and
/// never sent to the client.
#[derive(Debug)]
pub(crate) struct ApiError {
    message: &'static str,
}

impl ApiError {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
