//! Upstream record shapes as returned by the profile API.
//!
//! ### Counts
//! Follower, followee, like and comment counts are plain non-negative
//! integers. Private or restricted accounts sometimes omit them entirely,
//! so every count is `#[serde(default)]` and reads as `0` when missing.
//!
//! ### Free text
//! `biography`, `caption` and `full_name` may be absent, `null`, or an empty
//! string. They are kept as `Option<String>` here; the projector decides how
//! each one appears in the output schema.
//!
//! ### `taken_at`
//! RFC 3339 timestamp of the post in UTC, e.g. `"2024-05-01T18:22:04Z"`.
//!
//! ### `location`
//! Either `null` or an object carrying at least a `name`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Account attributes from `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountAttrs {
    pub username: String,

    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub followees: u64,

    #[serde(default)]
    pub biography: Option<String>,

    #[serde(default)]
    pub is_private: bool,

    /// Total number of posts on the account.
    #[serde(default)]
    pub media_count: u64,
}

/// One post from the account's timeline, newest first.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Upstream post identifier, used to address its comments.
    pub id: String,

    #[serde(default)]
    pub caption: Option<String>,

    pub taken_at: DateTime<Utc>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub like_count: u64,

    #[serde(default)]
    pub comment_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
}

/// One comment on a post, in upstream emission order.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: String,
}

/// One ranked hit from `GET /search/profiles`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileHit {
    pub username: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub biography: Option<String>,

    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub followees: u64,

    #[serde(default)]
    pub media_count: u64,

    #[serde(default)]
    pub is_private: bool,
}

/// One page of any paginated listing.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}
