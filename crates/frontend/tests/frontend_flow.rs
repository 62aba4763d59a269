use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use configs::{ApiConfig, FrontendConfig};
use reqwest::{redirect::Policy, StatusCode};
use serde_json::{json, Value};
use service::posts::MemoryPostStore;
use tokio::net::TcpListener;

use server::state::ServerState;

struct TestEnv {
    api_url: String,
    frontend_url: String,
}

async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

async fn frontend_for(api_url: &str) -> anyhow::Result<String> {
    let cfg = FrontendConfig { api_url: api_url.to_string(), ..FrontendConfig::default() };
    spawn(frontend::startup::build_app(&cfg)?).await
}

async fn start() -> anyhow::Result<TestEnv> {
    let api = server::startup::build_app(
        ServerState::new(MemoryPostStore::empty()),
        &ApiConfig::default(),
    );
    let api_url = spawn(api).await?;
    let frontend_url = frontend_for(&api_url).await?;
    Ok(TestEnv { api_url, frontend_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("reqwest client")
}

async fn api_create(env: &TestEnv, body: Value) -> anyhow::Result<Value> {
    let res = client().post(format!("{}/posts", env.api_url)).json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(res.json().await?)
}

fn assert_redirects_home(res: &reqwest::Response) {
    assert_eq!(res.status(), StatusCode::FOUND);
    let location = res.headers().get("location").and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/"));
}

#[tokio::test]
async fn home_renders_posts_from_api() -> anyhow::Result<()> {
    let env = start().await?;
    api_create(&env, json!({"title": "Hello <world>", "content": "B", "author": "C"})).await?;

    let res = client().get(&env.frontend_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await?;
    assert!(html.contains("Hello &lt;world&gt;"));
    assert!(html.contains(r#"href="/edit/1""#));
    Ok(())
}

#[tokio::test]
async fn home_with_unreachable_api_is_500() -> anyhow::Result<()> {
    let frontend_url = frontend_for("http://127.0.0.1:1").await?;
    let res = client().get(&frontend_url).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"message": "Error fetching posts"}));
    Ok(())
}

#[tokio::test]
async fn new_form_is_empty() -> anyhow::Result<()> {
    let env = start().await?;
    let res = client().get(format!("{}/new", env.frontend_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await?;
    assert!(html.contains("New Post"));
    assert!(html.contains("Create Post"));
    assert!(html.contains(r#"action="/api/posts""#));
    Ok(())
}

#[tokio::test]
async fn create_submission_redirects_and_reaches_api() -> anyhow::Result<()> {
    let env = start().await?;
    let res = client()
        .post(format!("{}/api/posts", env.frontend_url))
        .form(&[("title", "From form"), ("content", "Body"), ("author", "Ann")])
        .send()
        .await?;
    assert_redirects_home(&res);

    let posts: Value = client().get(format!("{}/posts", env.api_url)).send().await?.json().await?;
    assert_eq!(posts[0]["id"], 1);
    assert_eq!(posts[0]["title"], "From form");
    assert_eq!(posts[0]["author"], "Ann");
    Ok(())
}

#[tokio::test]
async fn json_submissions_are_forwarded() -> anyhow::Result<()> {
    let env = start().await?;
    let res = client()
        .post(format!("{}/api/posts", env.frontend_url))
        .json(&json!({"title": "From JSON", "content": "Body", "author": "Ann"}))
        .send()
        .await?;
    assert_redirects_home(&res);

    let res = client()
        .post(format!("{}/api/posts/1", env.frontend_url))
        .json(&json!({"content": "Edited"}))
        .send()
        .await?;
    assert_redirects_home(&res);

    let post: Value = client().get(format!("{}/posts/1", env.api_url)).send().await?.json().await?;
    assert_eq!(post["title"], "From JSON");
    assert_eq!(post["content"], "Edited");
    assert_eq!(post["author"], "Ann");
    Ok(())
}

#[tokio::test]
async fn edit_form_is_prefilled() -> anyhow::Result<()> {
    let env = start().await?;
    api_create(&env, json!({"title": "Old title", "content": "Old body", "author": "Ann"})).await?;

    let res = client().get(format!("{}/edit/1", env.frontend_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let html = res.text().await?;
    assert!(html.contains("Edit Post"));
    assert!(html.contains("Update Post"));
    assert!(html.contains(r#"value="Old title""#));
    assert!(html.contains(r#"action="/api/posts/1""#));
    Ok(())
}

#[tokio::test]
async fn edit_form_for_missing_post_is_500() -> anyhow::Result<()> {
    let env = start().await?;
    let res = client().get(format!("{}/edit/42", env.frontend_url)).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"message": "Error fetching post"}));
    Ok(())
}

#[tokio::test]
async fn update_submission_patches_supplied_fields() -> anyhow::Result<()> {
    let env = start().await?;
    api_create(&env, json!({"title": "A", "content": "B", "author": "C"})).await?;

    let res = client()
        .post(format!("{}/api/posts/1", env.frontend_url))
        .form(&[("title", "A2"), ("content", ""), ("author", "C")])
        .send()
        .await?;
    assert_redirects_home(&res);

    let post: Value = client().get(format!("{}/posts/1", env.api_url)).send().await?.json().await?;
    assert_eq!(post["title"], "A2");
    assert_eq!(post["content"], "B");
    assert_eq!(post["author"], "C");
    Ok(())
}

#[tokio::test]
async fn update_of_missing_post_is_500() -> anyhow::Result<()> {
    let env = start().await?;
    let res = client()
        .post(format!("{}/api/posts/9", env.frontend_url))
        .form(&[("title", "x")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"message": "Error updating post"}));
    Ok(())
}

#[tokio::test]
async fn delete_link_removes_post_and_redirects() -> anyhow::Result<()> {
    let env = start().await?;
    api_create(&env, json!({"title": "doomed"})).await?;

    let res = client().get(format!("{}/api/posts/delete/1", env.frontend_url)).send().await?;
    assert_redirects_home(&res);

    let res = client().get(format!("{}/posts/1", env.api_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_of_missing_post_is_500() -> anyhow::Result<()> {
    let env = start().await?;
    let res = client().get(format!("{}/api/posts/delete/999", env.frontend_url)).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"message": "Error deleting post"}));
    Ok(())
}
