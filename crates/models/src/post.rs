use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// A blog post as stored by the API and returned on the wire.
///
/// Text fields are optional because create stores whatever the client sent;
/// a field the client left out stays out of the JSON representation too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub date: NaiveDate,
}

/// Create input. No field is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Partial update input. Only non-empty fields are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Post {
    pub fn create(id: PostId, input: NewPost, date: NaiveDate) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            date,
        }
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn content_or_default(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }
}

// An empty string counts as "not supplied".
fn supplied(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

impl PostPatch {
    /// Overwrite the target's text fields with every supplied value.
    /// `id` and `date` are never touched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = supplied(self.title) {
            post.title = Some(title);
        }
        if let Some(content) = supplied(self.content) {
            post.content = Some(content);
        }
        if let Some(author) = supplied(self.author) {
            post.author = Some(author);
        }
    }

    /// True when applying this patch would change nothing.
    pub fn is_noop(&self) -> bool {
        [&self.title, &self.content, &self.author]
            .iter()
            .all(|f| f.as_deref().map_or(true, str::is_empty))
    }
}
