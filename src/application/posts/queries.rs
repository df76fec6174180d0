use crate::domain::posts::{Post, PostOrder, PostSearch};

use super::service::PostService;
use super::types::{PostServiceError, SearchPostsQuery};

impl PostService {
    /// List every post, optionally ordered by `sort` (`title|content|author|date`)
    /// in `direction` (`asc|desc`, default `asc`).
    pub async fn list_posts(
        &self,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Vec<Post>, PostServiceError> {
        let order = PostOrder::parse(sort, direction)?;
        let mut posts = self.reader.list_posts().await?;

        if let Some(order) = order {
            order.apply(&mut posts);
        }

        Ok(posts)
    }

    pub async fn search_posts(
        &self,
        query: SearchPostsQuery,
    ) -> Result<Vec<Post>, PostServiceError> {
        let search = PostSearch::new(query.title, query.content, query.author, query.date);
        if search.is_empty() {
            return Ok(Vec::new());
        }

        let mut posts = self.reader.list_posts().await?;
        posts.retain(|post| search.matches(post));
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::error::DomainError;
    use crate::infra::store::InMemoryPosts;

    use super::*;

    fn service() -> PostService {
        let store = Arc::new(InMemoryPosts::seeded());
        PostService::new(store.clone(), store)
    }

    #[tokio::test]
    async fn list_defaults_to_insertion_order() {
        let posts = service().list_posts(None, None).await.expect("list");
        let ids: Vec<u64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn list_sorts_by_title_descending() {
        let posts = service()
            .list_posts(Some("title"), Some("desc"))
            .await
            .expect("list");
        let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();
        assert_eq!(titles, vec!["Second post", "First post"]);
    }

    #[tokio::test]
    async fn list_rejects_unknown_direction() {
        let err = service()
            .list_posts(Some("date"), Some("up"))
            .await
            .expect_err("invalid direction");
        assert!(matches!(
            err,
            PostServiceError::Domain(DomainError::InvalidArgument {
                argument: "direction",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_or() {
        let service = service();

        let both = service
            .search_posts(SearchPostsQuery {
                title: Some("post".to_string()),
                ..Default::default()
            })
            .await
            .expect("search");
        assert_eq!(both.len(), 2);

        let either = service
            .search_posts(SearchPostsQuery {
                title: Some("FIRST".to_string()),
                author: Some("editor".to_string()),
                ..Default::default()
            })
            .await
            .expect("search");
        assert_eq!(either.len(), 2);

        let none = service
            .search_posts(SearchPostsQuery::default())
            .await
            .expect("search");
        assert!(none.is_empty());
    }
}
