//! In-memory implementations of the driven ports.
//!
//! One store backs every repository so a signup is visible to the journey
//! lookup, mirroring the foreign keys of the real schema.

use std::sync::Mutex;

use async_trait::async_trait;
use chauffeur_backend::domain::ports::{
    BlogPostRepository, BlogPostRepositoryError, FeedbackRepository, FeedbackRepositoryError,
    JourneyRepository, JourneyRepositoryError, UserPersistenceError, UserRepository,
};
use chauffeur_backend::domain::{
    BlogPost, EmailAddress, JourneyId, JourneyOwnership, NewComplaint, NewReview, NewUser,
    StoredCredentials, UserId, UserProfile,
};

#[derive(Default)]
struct Tables {
    users: Vec<StoredCredentials>,
    journeys: Vec<(JourneyId, UserId)>,
    complaints: Vec<NewComplaint>,
    reviews: Vec<NewReview>,
    blog_posts: Vec<BlogPost>,
}

/// Shared in-memory tables.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut guard = self.tables.lock().expect("store lock");
        f(&mut guard)
    }

    /// Register `journey_id` as owned by `client_id`.
    pub fn add_journey(&self, journey_id: i64, client_id: UserId) {
        let id = JourneyId::new(journey_id).expect("positive journey id");
        self.with_tables(|tables| tables.journeys.push((id, client_id)));
    }

    /// Insert a blog post as if published by the CMS.
    pub fn add_blog_post(&self, post: BlogPost) {
        self.with_tables(|tables| tables.blog_posts.push(post));
    }

    pub fn complaints(&self) -> Vec<NewComplaint> {
        self.with_tables(|tables| tables.complaints.clone())
    }

    pub fn reviews(&self) -> Vec<NewReview> {
        self.with_tables(|tables| tables.reviews.clone())
    }

    pub fn user_count(&self) -> usize {
        self.with_tables(|tables| tables.users.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_if_absent(
        &self,
        user: &NewUser,
    ) -> Result<Option<UserId>, UserPersistenceError> {
        Ok(self.with_tables(|tables| {
            if tables.users.iter().any(|row| row.profile.email == user.email) {
                return None;
            }
            let id = UserId::new(i64::try_from(tables.users.len()).expect("row count") + 1);
            tables.users.push(StoredCredentials {
                profile: UserProfile {
                    id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    phone: user.phone.clone(),
                    role: user.role,
                },
                password_hash: user.password_hash.clone(),
                status: user.status,
            });
            Some(id)
        }))
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, UserPersistenceError> {
        Ok(self.with_tables(|tables| {
            tables
                .users
                .iter()
                .find(|row| &row.profile.email == email)
                .cloned()
        }))
    }
}

#[async_trait]
impl JourneyRepository for InMemoryStore {
    async fn find_owned(
        &self,
        journey_id: JourneyId,
        email: &EmailAddress,
    ) -> Result<Option<JourneyOwnership>, JourneyRepositoryError> {
        Ok(self.with_tables(|tables| {
            let owner = tables
                .users
                .iter()
                .find(|row| &row.profile.email == email)?
                .profile
                .id;
            tables
                .journeys
                .iter()
                .find(|(id, client)| *id == journey_id && *client == owner)
                .map(|(id, client)| JourneyOwnership {
                    journey_id: *id,
                    client_id: *client,
                })
        }))
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryStore {
    async fn insert_complaint(
        &self,
        complaint: &NewComplaint,
    ) -> Result<(), FeedbackRepositoryError> {
        self.with_tables(|tables| tables.complaints.push(complaint.clone()));
        Ok(())
    }

    async fn insert_review(&self, review: &NewReview) -> Result<(), FeedbackRepositoryError> {
        self.with_tables(|tables| tables.reviews.push(review.clone()));
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryStore {
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogPostRepositoryError> {
        // Insertion order; the service is responsible for feed order.
        Ok(self.with_tables(|tables| tables.blog_posts.clone()))
    }
}
