pub mod posts;

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{types::Health, utils::http_trace::http_trace_layer};

use crate::openapi::ApiDoc;
use crate::pages;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: docs page, posts API, Swagger UI,
/// and static files from `public_dir` for anything else.
pub fn build_router(state: ServerState, public_dir: &str, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/", get(pages::api_home))
        .route("/health", get(health))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .with_state(state);

    let docs = SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    api.merge(docs)
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .layer(http_trace_layer())
}
