//! Repository traits describing storage adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::posts::{Post, PostDraft};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("post with id {id} not found")]
    NotFound { id: u64 },
}

#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: u64,
    pub draft: PostDraft,
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// All posts in insertion order.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    /// Store a new post under the lowest unused positive id.
    async fn create_post(&self, draft: PostDraft) -> Result<Post, RepoError>;

    async fn update_post(&self, params: UpdatePostParams) -> Result<Post, RepoError>;

    async fn delete_post(&self, id: u64) -> Result<Post, RepoError>;
}
