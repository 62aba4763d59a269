use axum::response::Html;

struct Endpoint {
    method: &'static str,
    path: &'static str,
    summary: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint { method: "GET", path: "/posts", summary: "List every post in creation order." },
    Endpoint { method: "GET", path: "/posts/:id", summary: "Fetch one post by id." },
    Endpoint { method: "POST", path: "/posts", summary: "Create a post from title, content and author." },
    Endpoint { method: "PATCH", path: "/posts/:id", summary: "Update any subset of title, content and author." },
    Endpoint { method: "DELETE", path: "/posts/:id", summary: "Delete a post." },
];

fn render_home() -> String {
    let rows: String = ENDPOINTS
        .iter()
        .map(|e| {
            format!(
                "      <tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>\n",
                e.method, e.path, e.summary
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Blog API</title>
    <link rel="stylesheet" href="/styles/main.css">
  </head>
  <body>
    <h1>Blog API</h1>
    <p>JSON bodies and URL-encoded forms are both accepted. Interactive docs: <a href="/api-docs/">/api-docs</a>.</p>
    <table>
      <tr><th>Method</th><th>Path</th><th>Description</th></tr>
{rows}    </table>
  </body>
</html>
"#
    )
}

/// `GET /`: human-readable overview of the API.
pub async fn api_home() -> Html<String> {
    Html(render_home())
}
