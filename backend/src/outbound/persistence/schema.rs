//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations in `backend/migrations`
//! exactly. Regenerate with `diesel print-schema` after changing them.

diesel::table! {
    /// Registered accounts.
    ///
    /// `email` holds the normalised address and carries the unique constraint
    /// signup conflicts against.
    users (id) {
        /// Primary key assigned by the sequence.
        id -> Int8,
        /// One of `guest`, `client`, `driver`, `admin`.
        role -> Text,
        name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        /// bcrypt hash; never leaves the persistence layer except for verify.
        password_hash -> Text,
        /// `active` or `inactive`.
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Trips, each owned by one client.
    client_journeys (id) {
        id -> Int8,
        client_id -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only complaints.
    client_complaints (id) {
        id -> Int8,
        client_id -> Int8,
        journey_id -> Int8,
        subject -> Text,
        details -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only reviews; `rating` is positive.
    client_reviews (id) {
        id -> Int8,
        client_id -> Int8,
        journey_id -> Int8,
        rating -> Int4,
        review -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Published blog posts.
    blog_posts (id) {
        id -> Int8,
        slug -> Text,
        title -> Text,
        summary -> Text,
        body -> Text,
        hero_image -> Nullable<Text>,
        tag -> Nullable<Text>,
        published_at -> Timestamptz,
    }
}

diesel::joinable!(client_journeys -> users (client_id));
diesel::joinable!(client_complaints -> client_journeys (journey_id));
diesel::joinable!(client_reviews -> client_journeys (journey_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    client_journeys,
    client_complaints,
    client_reviews,
    blog_posts,
);
