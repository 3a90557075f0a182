//! Published blog posts and feed ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Published blog post as served by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub hero_image: Option<String>,
    pub tag: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Feed order: newest publication first, higher id first on ties.
pub fn feed_order(left: &BlogPost, right: &BlogPost) -> Ordering {
    right
        .published_at
        .cmp(&left.published_at)
        .then_with(|| right.id.cmp(&left.id))
}

/// Sort `posts` into feed order in place.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use chauffeur_backend::domain::{BlogPost, sort_feed};
///
/// let post = |id, hour| BlogPost {
///     id,
///     slug: format!("post-{id}"),
///     title: "Title".into(),
///     summary: "Summary".into(),
///     body: "Body".into(),
///     hero_image: None,
///     tag: None,
///     published_at: Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap(),
/// };
/// let mut posts = vec![post(1, 9), post(2, 10)];
/// sort_feed(&mut posts);
/// assert_eq!(posts[0].id, 2);
/// ```
pub fn sort_feed(posts: &mut [BlogPost]) {
    posts.sort_by(feed_order);
}
