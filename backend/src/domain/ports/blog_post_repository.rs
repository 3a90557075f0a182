//! Read-side port for published blog posts.

use async_trait::async_trait;

use crate::domain::BlogPost;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading blog posts.
    pub enum BlogPostRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "blog post read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } => "blog post read query failed: {message}",
    }
}

/// Port for listing published posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Every published post. Adapters should return feed order but callers
    /// must not rely on it.
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogPostRepositoryError>;
}

