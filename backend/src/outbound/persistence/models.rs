//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{blog_posts, client_complaints, client_reviews, users};

/// Credential columns read back for login.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub id: i64,
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub status: String,
}

/// Insertable struct for signup.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub role: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub password_hash: &'a str,
    pub status: &'a str,
}

// ---------------------------------------------------------------------------
// Feedback models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = client_complaints)]
pub(crate) struct NewComplaintRow<'a> {
    pub client_id: i64,
    pub journey_id: i64,
    pub subject: &'a str,
    pub details: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = client_reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub client_id: i64,
    pub journey_id: i64,
    pub rating: i32,
    pub review: &'a str,
}

// ---------------------------------------------------------------------------
// Blog models
// ---------------------------------------------------------------------------

/// Row struct for reading from the blog_posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = blog_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BlogPostRow {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image: Option<String>,
    pub tag: Option<String>,
    pub published_at: DateTime<Utc>,
}
