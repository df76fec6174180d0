use async_trait::async_trait;
use metrics::{counter, gauge};

use crate::application::repos::{PostsWriteRepo, RepoError, UpdatePostParams};
use crate::domain::posts::{Post, PostDraft};

use super::{
    InMemoryPosts, METRIC_POSTS_CREATED, METRIC_POSTS_DELETED, METRIC_POSTS_STORED,
    METRIC_POSTS_UPDATED,
};

#[async_trait]
impl PostsWriteRepo for InMemoryPosts {
    async fn create_post(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.insert(draft);

        counter!(METRIC_POSTS_CREATED).increment(1);
        gauge!(METRIC_POSTS_STORED).set(store.len() as f64);
        Ok(post)
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<Post, RepoError> {
        let UpdatePostParams { id, draft } = params;
        let mut store = self.store.write().await;
        let post = store
            .overwrite(id, draft)
            .ok_or(RepoError::NotFound { id })?;

        counter!(METRIC_POSTS_UPDATED).increment(1);
        Ok(post)
    }

    async fn delete_post(&self, id: u64) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.remove(id).ok_or(RepoError::NotFound { id })?;

        counter!(METRIC_POSTS_DELETED).increment(1);
        gauge!(METRIC_POSTS_STORED).set(store.len() as f64);
        Ok(post)
    }
}
