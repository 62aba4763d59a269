use std::fmt;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{NewPost, Post, PostId, PostPatch};
use tracing::info;

use crate::errors::PostApiError;
use common::utils::payload::Payload;
use crate::state::ServerState;

/// A path id read by its leading integer.
///
/// Leading whitespace is skipped, then an optional sign and the longest run
/// of digits (`0x` switches to hex). `"12abc"` reads as 12 and `"abc"` as no
/// number at all. Ids that are missing or negative match no post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathId(Option<i64>);

impl PathId {
    fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (radix, s) = match s.get(..2) {
            Some("0x") | Some("0X") => (16, &s[2..]),
            _ => (10, s),
        };
        let digits = s
            .find(|c: char| !c.is_digit(radix))
            .map_or(s, |end| &s[..end]);
        if digits.is_empty() {
            return PathId(None);
        }
        let magnitude = digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0i64, |acc, d| {
                acc.saturating_mul(i64::from(radix)).saturating_add(i64::from(d))
            });
        PathId(Some(if negative { -magnitude } else { magnitude }))
    }

    fn post_id(self) -> Option<PostId> {
        self.0.and_then(|n| PostId::try_from(n).ok())
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("NaN"),
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses((status = 200, description = "All posts in creation order", body = [crate::openapi::PostDoc]))
)]
pub async fn list_posts(State(state): State<ServerState>) -> Json<Vec<Post>> {
    let posts = state.posts.list().await;
    info!(count = posts.len(), "list posts");
    Json(posts)
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = crate::openapi::PostDoc),
        (status = 404, description = "No such post", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_post(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>, PostApiError> {
    let id = PathId::parse(&raw_id).post_id().ok_or(PostApiError::NotFound)?;
    let post = state.posts.get(id).await?;
    Ok(Json(post))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body(content = crate::openapi::NewPostDoc, description = "JSON or URL-encoded form"),
    responses((status = 201, description = "Created", body = crate::openapi::PostDoc))
)]
pub async fn create_post(
    State(state): State<ServerState>,
    Payload(input): Payload<NewPost>,
) -> (StatusCode, Json<Post>) {
    let post = state.posts.create(input).await;
    (StatusCode::CREATED, Json(post))
}

#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    request_body(content = crate::openapi::PostPatchDoc, description = "Any subset of the fields"),
    responses(
        (status = 200, description = "Updated post", body = crate::openapi::PostDoc),
        (status = 404, description = "No such post", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update_post(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    Payload(patch): Payload<PostPatch>,
) -> Result<Json<Post>, PostApiError> {
    let id = PathId::parse(&raw_id).post_id().ok_or(PostApiError::NotFound)?;
    let post = state.posts.update(id, patch).await?;
    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "No such post", body = crate::openapi::DeleteErrorDoc)
    )
)]
pub async fn delete_post(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, PostApiError> {
    let requested = PathId::parse(&raw_id);
    let id = requested
        .post_id()
        .ok_or_else(|| PostApiError::NothingDeleted(requested.to_string()))?;
    state
        .posts
        .delete(id)
        .await
        .map_err(|_| PostApiError::NothingDeleted(requested.to_string()))?;
    Ok(Json(serde_json::json!({"message": "Post deleted."})))
}
