//! Projection from upstream shapes to the fixed output records.
//!
//! Projection is pure: the same upstream record always produces the same
//! output record, and every record of a kind carries the same key set.

use chrono::SecondsFormat;

use crate::record::{AccountSummary, PostRecord, ProfileSearchResult};
use crate::types::{AccountAttrs, Comment, Post, ProfileHit};

/// Projects account attributes into an [`AccountSummary`].
#[must_use]
pub fn project_account(attrs: &AccountAttrs) -> AccountSummary {
    AccountSummary {
        username: attrs.username.clone(),
        follower_count: attrs.followers,
        followee_count: attrs.followees,
        biography: attrs.biography.clone().unwrap_or_default(),
        is_private: attrs.is_private,
        post_count: attrs.media_count,
    }
}

/// Projects a post and its already-bounded comment candidates into a
/// [`PostRecord`].
///
/// The caption is trimmed but kept even when it ends up empty; a missing
/// caption or location stays `None`.
#[must_use]
pub fn project_post(post: &Post, comments: &[Comment]) -> PostRecord {
    PostRecord {
        caption: post.caption.as_deref().map(|c| c.trim().to_owned()),
        timestamp_utc: post.taken_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        location_name: post.location.as_ref().map(|l| l.name.clone()),
        like_count: post.like_count,
        comment_count: post.comment_count,
        top_comments: project_comments(comments),
    }
}

/// Trims each comment and drops the ones left empty, preserving order.
///
/// Callers bound the candidate list before calling this, so the result can
/// be shorter than the bound.
#[must_use]
pub fn project_comments(comments: &[Comment]) -> Vec<String> {
    comments
        .iter()
        .map(|c| c.text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Projects a search hit into a [`ProfileSearchResult`].
#[must_use]
pub fn project_search_hit(hit: &ProfileHit) -> ProfileSearchResult {
    ProfileSearchResult {
        username: hit.username.clone(),
        full_name: hit.full_name.clone().unwrap_or_default(),
        biography: hit.biography.clone().unwrap_or_default(),
        follower_count: hit.followers,
        following_count: hit.followees,
        post_count: hit.media_count,
        is_private: hit.is_private,
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
