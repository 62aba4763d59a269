//! Data types shared by the posts API and the frontend that consumes it.

pub mod post;

pub use post::{NewPost, Post, PostId, PostPatch};
