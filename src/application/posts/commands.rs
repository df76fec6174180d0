use tracing::info;

use crate::application::repos::UpdatePostParams;
use crate::domain::posts::{Post, PostDraft};

use super::service::PostService;
use super::types::{CreatePostCommand, PostServiceError, UpdatePostCommand};

impl PostService {
    pub async fn create_post(&self, command: CreatePostCommand) -> Result<Post, PostServiceError> {
        let draft = PostDraft::new(
            command.title,
            command.content,
            command.author,
            command.date,
        )?
        .with_creation_defaults((self.today)());

        let post = self.writer.create_post(draft).await?;

        info!(
            target = "masterblog::posts",
            id = post.id,
            title = %post.title,
            "post created"
        );

        Ok(post)
    }

    /// Overwrite title, content, author and date; there is no partial update.
    pub async fn update_post(&self, command: UpdatePostCommand) -> Result<Post, PostServiceError> {
        let draft = PostDraft::new(
            command.title,
            command.content,
            command.author,
            command.date,
        )?;

        let post = self
            .writer
            .update_post(UpdatePostParams {
                id: command.id,
                draft,
            })
            .await?;

        info!(target = "masterblog::posts", id = post.id, "post updated");

        Ok(post)
    }

    pub async fn delete_post(&self, id: u64) -> Result<Post, PostServiceError> {
        let post = self.writer.delete_post(id).await?;

        info!(target = "masterblog::posts", id, "post deleted");

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::{Date, macros::date};

    use crate::application::repos::RepoError;
    use crate::domain::error::DomainError;
    use crate::infra::store::InMemoryPosts;

    use super::*;

    fn fixed_today() -> Date {
        date!(2024 - 02 - 29)
    }

    fn service(store: Arc<InMemoryPosts>) -> PostService {
        PostService::new(store.clone(), store).with_today(fixed_today)
    }

    fn command(title: &str, content: &str) -> CreatePostCommand {
        CreatePostCommand {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let service = service(Arc::new(InMemoryPosts::new()));

        let post = service
            .create_post(command("Hello", "World"))
            .await
            .expect("created");

        assert_eq!(post.id, 1);
        assert_eq!(post.author.as_deref(), Some("Unknown"));
        assert_eq!(post.date.as_deref(), Some("2024-02-29"));
    }

    #[tokio::test]
    async fn create_rejects_missing_content() {
        let store = Arc::new(InMemoryPosts::new());
        let service = service(store.clone());

        let err = service
            .create_post(CreatePostCommand {
                title: Some("Hello".to_string()),
                ..Default::default()
            })
            .await
            .expect_err("content is required");

        assert!(matches!(
            err,
            PostServiceError::Domain(DomainError::Validation { .. })
        ));
        assert!(service.list_posts(None, None).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn update_validates_before_lookup() {
        let service = service(Arc::new(InMemoryPosts::new()));

        let err = service
            .update_post(UpdatePostCommand {
                id: 42,
                ..Default::default()
            })
            .await
            .expect_err("validation first");
        assert!(matches!(err, PostServiceError::Domain(_)));

        let err = service
            .update_post(UpdatePostCommand {
                id: 42,
                title: Some("t".to_string()),
                content: Some("c".to_string()),
                ..Default::default()
            })
            .await
            .expect_err("unknown id");
        assert!(matches!(
            err,
            PostServiceError::Repo(RepoError::NotFound { id: 42 })
        ));
    }

    #[tokio::test]
    async fn update_clears_omitted_optional_fields() {
        let service = service(Arc::new(InMemoryPosts::new()));
        let created = service
            .create_post(command("Hello", "World"))
            .await
            .expect("created");

        let updated = service
            .update_post(UpdatePostCommand {
                id: created.id,
                title: Some("Hello again".to_string()),
                content: Some("Still here".to_string()),
                ..Default::default()
            })
            .await
            .expect("updated");

        assert_eq!(updated.title, "Hello again");
        assert_eq!(updated.author, None);
        assert_eq!(updated.date, None);
    }

    #[tokio::test]
    async fn delete_then_create_reuses_lowest_id() {
        let service = service(Arc::new(InMemoryPosts::seeded()));

        service.delete_post(1).await.expect("deleted");
        let post = service
            .create_post(command("Replacement", "Fills the gap"))
            .await
            .expect("created");

        assert_eq!(post.id, 1);

        let err = service.delete_post(99).await.expect_err("unknown id");
        assert!(matches!(
            err,
            PostServiceError::Repo(RepoError::NotFound { id: 99 })
        ));
    }
}
