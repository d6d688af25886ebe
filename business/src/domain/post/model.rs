use chrono::{DateTime, Utc};

use crate::domain::session::model::User;
use crate::domain::shared::value_objects::DocumentId;

pub const DEFAULT_PHOTO_URL: &str = "https://via.placeholder.com/150";

const ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub name: String,
    pub photo_url: String,
}

impl Author {
    /// Display name, then email local part, then "Anonymous".
    pub fn for_user(user: &User) -> Self {
        let name = user
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .or_else(|| {
                user.email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .filter(|local| !local.is_empty())
            })
            .unwrap_or(ANONYMOUS_NAME)
            .to_string();

        Self {
            name,
            photo_url: DEFAULT_PHOTO_URL.to_string(),
        }
    }
}

/// Fields written when a post is created. The store stamps the creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub content: String,
    pub tags: Vec<String>,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: DocumentId,
    pub content: String,
    pub tags: Vec<String>,
    pub author: Author,
    /// `None` while the server timestamp is pending.
    pub created_at: Option<DateTime<Utc>>,
}

/// Orders a feed snapshot newest first. Pending posts are the newest.
pub fn sort_feed(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.created_at, b.created_at) {
        (None, None) => std::cmp::Ordering::Equal,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (Some(_), None) => std::cmp::Ordering::Greater,
        (Some(a), Some(b)) => b.cmp(&a),
    });
}
