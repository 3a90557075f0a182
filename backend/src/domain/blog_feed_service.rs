//! Blog feed query service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{BlogFeedQuery, BlogPostRepository, BlogPostRepositoryError};
use crate::domain::{BlogPost, Error, sort_feed};

fn map_repository_error(error: BlogPostRepositoryError) -> Error {
    error!(error = %error, "blog post read failure");
    match error {
        BlogPostRepositoryError::Connection { message } => {
            Error::internal(format!("blog post repository unavailable: {message}"))
        }
        BlogPostRepositoryError::Query { message } => {
            Error::internal(format!("blog post repository error: {message}"))
        }
    }
}

/// Blog feed service implementing the feed query driving port.
///
/// Every call re-reads the repository.
#[derive(Clone)]
pub struct BlogFeedService<R> {
    posts: Arc<R>,
}

impl<R> BlogFeedService<R> {
    pub fn new(posts: Arc<R>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl<R> BlogFeedQuery for BlogFeedService<R>
where
    R: BlogPostRepository,
{
    async fn list_posts(&self) -> Result<Vec<BlogPost>, Error> {
        let mut posts = self
            .posts
            .list_published()
            .await
            .map_err(map_repository_error)?;
        sort_feed(&mut posts);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockBlogPostRepository;
    use chrono::{TimeZone, Utc};

    fn post(id: i64, hour: u32) -> BlogPost {
        BlogPost {
            id,
            slug: format!("post-{id}"),
            title: format!("Post {id}"),
            summary: "Summary".into(),
            body: "Body".into(),
            hero_image: None,
            tag: None,
            published_at: Utc
                .with_ymd_and_hms(2024, 1, 15, hour, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[tokio::test]
    async fn reorders_whatever_the_repository_returns() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_list_published()
            .times(1)
            .return_once(|| Ok(vec![post(2, 9), post(1, 12), post(3, 9)]));

        let service = BlogFeedService::new(Arc::new(repo));
        let ids: Vec<i64> = service
            .list_posts()
            .await
            .expect("feed")
            .into_iter()
            .map(|post| post.id)
            .collect();

        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn every_call_requeries() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_list_published()
            .times(2)
            .returning(|| Ok(Vec::new()));

        let service = BlogFeedService::new(Arc::new(repo));
        assert!(service.list_posts().await.expect("feed").is_empty());
        assert!(service.list_posts().await.expect("feed").is_empty());
    }

    #[tokio::test]
    async fn repository_failure_is_internal() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_list_published()
            .return_once(|| Err(BlogPostRepositoryError::connection("refused")));

        let service = BlogFeedService::new(Arc::new(repo));
        let error = service.list_posts().await.expect_err("read failure");
        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
