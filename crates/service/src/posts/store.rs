use async_trait::async_trait;
use models::{NewPost, Post, PostId, PostPatch};

use crate::errors::ServiceError;

/// Trait abstraction for post storage.
/// Implementations keep insertion order and never reuse an id.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn list(&self) -> Vec<Post>;
    async fn get(&self, id: PostId) -> Result<Post, ServiceError>;
    async fn create(&self, input: NewPost) -> Post;
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, ServiceError>;
    /// Removes the post and returns it.
    async fn delete(&self, id: PostId) -> Result<Post, ServiceError>;
    async fn len(&self) -> usize;
}
