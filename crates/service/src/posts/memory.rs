use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use models::{NewPost, Post, PostId, PostPatch};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::posts::{seed, store::PostStore};

/// Source of the creation date stamped on new posts.
pub type Clock = fn() -> NaiveDate;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

struct Posts {
    items: Vec<Post>,
    last_id: PostId,
}

/// In-memory post store.
///
/// Posts and the id counter sit behind one lock, so allocating an id and
/// appending the post happen as a single step. Nothing survives a restart.
/// Constructors hand out `Arc<Self>`; that is the only layer of sharing.
pub struct MemoryPostStore {
    inner: RwLock<Posts>,
    clock: Clock,
}

impl MemoryPostStore {
    /// Start from `seed`; the counter resumes after the highest seeded id.
    pub fn new(seed: Vec<Post>) -> Arc<Self> {
        Self::with_clock(seed, utc_today)
    }

    pub fn with_clock(seed: Vec<Post>, clock: Clock) -> Arc<Self> {
        let last_id = seed.iter().map(|p| p.id).max().unwrap_or(0);
        Arc::new(Self {
            inner: RwLock::new(Posts { items: seed, last_id }),
            clock,
        })
    }

    /// Store holding the default demo posts.
    pub fn seeded() -> Arc<Self> {
        Self::new(seed::default_posts())
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self) -> Vec<Post> {
        self.inner.read().await.items.clone()
    }

    async fn get(&self, id: PostId) -> Result<Post, ServiceError> {
        let posts = self.inner.read().await;
        posts
            .items
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }

    async fn create(&self, input: NewPost) -> Post {
        let date = (self.clock)();
        let mut posts = self.inner.write().await;
        posts.last_id += 1;
        let post = Post::create(posts.last_id, input, date);
        posts.items.push(post.clone());
        info!(id = post.id, total = posts.items.len(), "post created");
        post
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, ServiceError> {
        let mut posts = self.inner.write().await;
        let post = posts
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        if patch.is_noop() {
            debug!(id, "update carried no fields");
        }
        patch.apply_to(post);
        info!(id, "post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<Post, ServiceError> {
        let mut posts = self.inner.write().await;
        let index = posts
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        // `remove`, not `swap_remove`: list order must survive deletes.
        let removed = posts.items.remove(index);
        info!(id, total = posts.items.len(), "post deleted");
        Ok(removed)
    }

    async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }
}
