//! Output records written to disk and returned to callers.
//!
//! Field order and JSON key names match the files produced by earlier
//! releases, so existing consumers keep reading the same documents. Every
//! field is always serialized; absent upstream values appear as `null` or `""`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub username: String,

    #[serde(rename = "followers")]
    pub follower_count: u64,

    #[serde(rename = "followees")]
    pub followee_count: u64,

    pub biography: String,

    pub is_private: bool,

    #[serde(rename = "total_posts")]
    pub post_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub caption: Option<String>,

    /// ISO-8601 UTC timestamp.
    #[serde(rename = "timestamp")]
    pub timestamp_utc: String,

    #[serde(rename = "location")]
    pub location_name: Option<String>,

    #[serde(rename = "likes")]
    pub like_count: u64,

    #[serde(rename = "comments")]
    pub comment_count: u64,

    /// Trimmed, non-empty comment texts in upstream order.
    #[serde(rename = "comments_top")]
    pub top_comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSearchResult {
    pub username: String,

    pub full_name: String,

    pub biography: String,

    #[serde(rename = "followers")]
    pub follower_count: u64,

    #[serde(rename = "following")]
    pub following_count: u64,

    #[serde(rename = "posts")]
    pub post_count: u64,

    pub is_private: bool,
}

/// A post whose comment sub-fetch failed and fell back to an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedItem {
    /// 1-based position of the post within the run.
    pub position: usize,
    pub reason: String,
}

/// Result of a completed profile scrape.
#[derive(Debug, Clone)]
pub struct ScrapeRun {
    /// Directory holding the account file and one file per post.
    pub directory: PathBuf,
    pub account: AccountSummary,
    pub posts: Vec<PostRecord>,
    /// Posts whose `top_comments` is empty because the fetch failed, not
    /// because upstream had none.
    pub degraded: Vec<DegradedItem>,
}

impl ScrapeRun {
    /// Returns the run as one ordered document list: the account summary
    /// followed by every post record.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if a record cannot be converted.
    pub fn into_documents(self) -> Result<Vec<serde_json::Value>, serde_json::Error> {
        let mut documents = Vec::with_capacity(self.posts.len() + 1);
        documents.push(serde_json::to_value(self.account)?);
        for post in self.posts {
            documents.push(serde_json::to_value(post)?);
        }
        Ok(documents)
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Result of a completed profile search.
#[derive(Debug, Clone)]
pub struct SearchRun {
    /// File the results were written to.
    pub path: PathBuf,
    pub results: Vec<ProfileSearchResult>,
}
