//! PostgreSQL-backed `BlogPostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::BlogPost;
use crate::domain::ports::{BlogPostRepository, BlogPostRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::BlogPostRow;
use super::pool::{DbPool, PoolError};
use super::schema::blog_posts;

/// Diesel-backed blog post reader.
#[derive(Clone)]
pub struct DieselBlogPostRepository {
    pool: DbPool,
}

impl DieselBlogPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BlogPostRepositoryError {
    map_basic_pool_error(error, BlogPostRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BlogPostRepositoryError {
    map_basic_diesel_error(
        error,
        BlogPostRepositoryError::query,
        BlogPostRepositoryError::connection,
    )
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            title: row.title,
            summary: row.summary,
            body: row.body,
            hero_image: row.hero_image,
            tag: row.tag,
            published_at: row.published_at,
        }
    }
}

#[async_trait]
impl BlogPostRepository for DieselBlogPostRepository {
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogPostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BlogPostRow> = blog_posts::table
            .order((blog_posts::published_at.desc(), blog_posts::id.desc()))
            .select(BlogPostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }
}
