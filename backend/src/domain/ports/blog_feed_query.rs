//! Driving port for the public blog feed.

use async_trait::async_trait;

use crate::domain::{BlogPost, Error};

/// Domain use-case port for reading the blog feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogFeedQuery: Send + Sync {
    /// Every published post, newest first with higher ids first on ties.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, Error>;
}
