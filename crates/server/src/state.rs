use std::sync::Arc;

use service::posts::{MemoryPostStore, PostStore};

/// Router state: the post store, shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub posts: Arc<dyn PostStore>,
}

impl ServerState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// State backed by a fresh in-memory store holding the demo posts.
    pub fn seeded() -> Self {
        Self::new(MemoryPostStore::seeded())
    }
}
