use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;

/// Failures of the posts endpoints, rendered with the exact bodies
/// clients of the API already depend on.
#[derive(Debug, Error)]
pub enum PostApiError {
    /// Get/update miss: `{"message":"Post not found"}`.
    #[error("Post not found")]
    NotFound,
    /// Delete miss, echoing the requested id.
    #[error("Post with id: {0} not found. No posts were deleted.")]
    NothingDeleted(String),
}

impl From<ServiceError> for PostApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => PostApiError::NotFound,
        }
    }
}

impl IntoResponse for PostApiError {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        match self {
            PostApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"message": msg}))).into_response()
            }
            PostApiError::NothingDeleted(_) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
