use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct PostDoc {
    pub id: u64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Creation day, `YYYY-MM-DD`.
    #[schema(example = "2024-05-17")]
    pub date: String,
}

#[derive(ToSchema)]
pub struct NewPostDoc {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Empty strings are treated as absent.
#[derive(ToSchema)]
pub struct PostPatchDoc {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    #[schema(example = "Post deleted.")]
    pub message: String,
}

#[derive(ToSchema)]
pub struct DeleteErrorDoc {
    #[schema(example = "Post with id: 999 not found. No posts were deleted.")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Blog posts API", description = "CRUD over an in-memory collection of blog posts"),
    paths(
        crate::routes::health,
        crate::routes::posts::list_posts,
        crate::routes::posts::get_post,
        crate::routes::posts::create_post,
        crate::routes::posts::update_post,
        crate::routes::posts::delete_post,
    ),
    components(
        schemas(
            HealthResponse,
            PostDoc,
            NewPostDoc,
            PostPatchDoc,
            MessageDoc,
            DeleteErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts")
    )
)]
pub struct ApiDoc;
