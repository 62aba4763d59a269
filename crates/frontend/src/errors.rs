use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::client::ClientError;

/// A page could not be produced because the API call behind it failed.
///
/// Every upstream cause collapses into one 500 with a fixed message; the
/// cause itself only goes to the log.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PageError {
    pub message: &'static str,
    #[source]
    pub source: ClientError,
}

impl PageError {
    /// Adapter for `map_err`: logs `source` and keeps `message` for the client.
    pub fn upstream(message: &'static str) -> impl FnOnce(ClientError) -> PageError {
        move |source| {
            error!(error = %source, %message, "api call failed");
            PageError { message, source }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"message": self.message})),
        )
            .into_response()
    }
}
