//! Service layer owning the post collection.
//! - `posts::store::PostStore` is the seam route handlers depend on.
//! - `posts::memory::MemoryPostStore` is the process-lifetime implementation.

pub mod errors;
pub mod posts;
