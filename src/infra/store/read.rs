use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::posts::Post;

use super::InMemoryPosts;

#[async_trait]
impl PostsRepo for InMemoryPosts {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().cloned().collect())
    }
}
