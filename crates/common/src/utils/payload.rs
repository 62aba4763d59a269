//! Request body extractor accepting JSON or URL-encoded forms.
//!
//! HTML forms post `application/x-www-form-urlencoded`, API clients post
//! JSON; both land in the same input type. A missing or empty body, or an
//! unrecognised content type, yields `T::default()`.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();
    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Body present but not decodable: 400 `{"message": ...}`.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PayloadRejection(String);

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "rejected request body");
        (StatusCode::BAD_REQUEST, Json(serde_json::json!({"message": self.0}))).into_response()
    }
}

pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        match body_kind(content_type) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| PayloadRejection(e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Payload(T::default()));
                }
                serde_json::from_slice(&bytes)
                    .map(Payload)
                    .map_err(|e| PayloadRejection(format!("invalid JSON body: {e}")))
            }
            BodyKind::Form => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| PayloadRejection(e.body_text()))?;
                Ok(Payload(value))
            }
            BodyKind::Other => Ok(Payload(T::default())),
        }
    }
}
