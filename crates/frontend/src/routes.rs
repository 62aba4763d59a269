use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use models::{NewPost, PostPatch};
use tower_http::services::ServeDir;
use tracing::info;

use common::utils::http_trace::http_trace_layer;
use common::utils::payload::Payload;

use crate::client::ApiClient;
use crate::errors::PageError;
use crate::views;

#[derive(Clone)]
pub struct FrontendState {
    pub api: ApiClient,
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(LOCATION, "/")]).into_response()
}

pub async fn home(State(state): State<FrontendState>) -> Result<Html<String>, PageError> {
    let posts = state
        .api
        .list_posts()
        .await
        .map_err(PageError::upstream("Error fetching posts"))?;
    Ok(Html(views::index(&posts)))
}

pub async fn new_form() -> Html<String> {
    Html(views::modify(views::NEW_HEADING, views::NEW_SUBMIT, None))
}

pub async fn edit_form(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let post = state
        .api
        .get_post(&id)
        .await
        .map_err(PageError::upstream("Error fetching post"))?;
    Ok(Html(views::modify(views::EDIT_HEADING, views::EDIT_SUBMIT, Some(&post))))
}

pub async fn create_post(
    State(state): State<FrontendState>,
    Payload(input): Payload<NewPost>,
) -> Result<Response, PageError> {
    let created = state
        .api
        .create_post(&input)
        .await
        .map_err(PageError::upstream("Error creating post"))?;
    info!(id = created.id, "post submitted");
    Ok(redirect_home())
}

pub async fn update_post(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
    Payload(patch): Payload<PostPatch>,
) -> Result<Response, PageError> {
    state
        .api
        .update_post(&id, &patch)
        .await
        .map_err(PageError::upstream("Error updating post"))?;
    info!(%id, "post update submitted");
    Ok(redirect_home())
}

pub async fn delete_post(
    State(state): State<FrontendState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    state
        .api
        .delete_post(&id)
        .await
        .map_err(PageError::upstream("Error deleting post"))?;
    info!(%id, "post delete submitted");
    Ok(redirect_home())
}

/// Pages, form targets, and static files from `public_dir` for anything else.
pub fn build_router(state: FrontendState, public_dir: &str) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/new", get(new_form))
        .route("/edit/:id", get(edit_form))
        .route("/api/posts", post(create_post))
        .route("/api/posts/:id", post(update_post))
        .route("/api/posts/delete/:id", get(delete_post))
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
        .layer(http_trace_layer())
}
