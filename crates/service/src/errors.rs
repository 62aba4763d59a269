use models::PostId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("post {0} not found")]
    NotFound(PostId),
}
