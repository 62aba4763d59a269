//! Server-side HTML rendering.
//!
//! Every value that came from the API goes through [`escape`] before it is
//! written into markup.

use std::fmt::Write;

use models::Post;

pub const NEW_HEADING: &str = "New Post";
pub const NEW_SUBMIT: &str = "Create Post";
pub const EDIT_HEADING: &str = "Edit Post";
pub const EDIT_SUBMIT: &str = "Update Post";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/styles/main.css">
  </head>
  <body>
    <header>
      <h1><a href="/">My Blog</a></h1>
    </header>
    <main class="container">
{body}    </main>
  </body>
</html>
"#,
        title = escape(title),
    )
}

/// Home page listing every post.
pub fn index(posts: &[Post]) -> String {
    let mut body = String::from("      <a class=\"new-post\" href=\"/new\">New Post</a>\n");
    if posts.is_empty() {
        body.push_str("      <p class=\"empty\">No posts yet.</p>\n");
    } else {
        body.push_str("      <ul id=\"postsList\">\n");
        for post in posts {
            // Writing to a String cannot fail.
            let _ = write!(
                body,
                r#"        <li id="post-{id}">
          <h2>{title}</h2>
          <small>{date}</small>
          <p>{content}</p>
          <small>By: {author}</small>
          <a class="edit" href="/edit/{id}">Edit</a>
          <a class="delete" href="/api/posts/delete/{id}">Delete</a>
        </li>
"#,
                id = post.id,
                title = escape(post.title_or_default()),
                date = post.date.format("%Y-%m-%d"),
                content = escape(post.content_or_default()),
                author = escape(post.author_or_default()),
            );
        }
        body.push_str("      </ul>\n");
    }
    layout("My Blog", &body)
}

/// Create or edit form. `post` pre-fills the fields and targets the update route.
pub fn modify(heading: &str, submit: &str, post: Option<&Post>) -> String {
    let action = match post {
        Some(p) => format!("/api/posts/{}", p.id),
        None => "/api/posts".to_string(),
    };
    let title = post.map(Post::title_or_default).unwrap_or_default();
    let content = post.map(Post::content_or_default).unwrap_or_default();
    let author = post.map(Post::author_or_default).unwrap_or_default();
    let body = format!(
        r#"      <h2>{heading}</h2>
      <form id="newPostForm" method="post" action="{action}">
        <input type="text" name="title" placeholder="Title" value="{title}" required>
        <textarea name="content" placeholder="Content" required rows="10">{content}</textarea>
        <input type="text" name="author" placeholder="Author" value="{author}" required>
        <button class="full-width" type="submit">{submit}</button>
      </form>
"#,
        heading = escape(heading),
        action = escape(&action),
        title = escape(title),
        content = escape(content),
        author = escape(author),
        submit = escape(submit),
    );
    layout(heading, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: Some(title.into()),
            content: Some("Body <b>bold</b>".into()),
            author: Some("O'Neil".into()),
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn index_renders_posts_in_order_with_links() {
        let html = index(&[post(1, "First"), post(5, "Second")]);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains(r#"href="/edit/5""#));
        assert!(html.contains(r#"href="/api/posts/delete/1""#));
        assert!(html.contains("2024-03-09"));
        assert!(html.contains("Body &lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("By: O&#39;Neil"));
    }

    #[test]
    fn index_without_posts_says_so() {
        assert!(index(&[]).contains("No posts yet."));
    }

    #[test]
    fn new_form_posts_to_create_route() {
        let html = modify(NEW_HEADING, NEW_SUBMIT, None);
        assert!(html.contains(r#"action="/api/posts""#));
        assert!(html.contains("<h2>New Post</h2>"));
        assert!(html.contains(">Create Post</button>"));
        assert!(html.contains(r#"name="title" placeholder="Title" value="""#));
    }

    #[test]
    fn edit_form_is_prefilled_and_targets_post() {
        let p = post(3, r#"Say "hi""#);
        let html = modify(EDIT_HEADING, EDIT_SUBMIT, Some(&p));
        assert!(html.contains(r#"action="/api/posts/3""#));
        assert!(html.contains(r#"value="Say &quot;hi&quot;""#));
        assert!(html.contains(">Update Post</button>"));
    }
}
