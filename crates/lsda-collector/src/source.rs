//! Capability traits for the upstream social platform.
//!
//! A [`SocialClient`] performs the login and hands back a [`SocialSession`];
//! every listing a session exposes is a single-pass, pull-based
//! [`RecordStream`] that fetches further pages only when polled.

use futures::stream::BoxStream;
use lsda_core::Credentials;

use crate::error::SourceError;
use crate::types::{AccountAttrs, Comment, Post, ProfileHit};

/// Lazy, forward-only sequence of upstream records.
pub type RecordStream<'a, T> = BoxStream<'a, Result<T, SourceError>>;

#[allow(async_fn_in_trait)] // runs are driven on a single task; no Send bound required
pub trait SocialClient {
    type Session: SocialSession;

    /// Authenticates and opens a session owned by one run.
    async fn login(&self, credentials: &Credentials) -> Result<Self::Session, SourceError>;
}

#[allow(async_fn_in_trait)]
pub trait SocialSession {
    /// Looks up an account by username.
    async fn lookup_profile(&self, username: &str) -> Result<AccountAttrs, SourceError>;

    /// Posts of `account` in upstream order (newest first).
    fn posts<'a>(&'a self, account: &AccountAttrs) -> RecordStream<'a, Post>;

    /// Comments on `post` in upstream order.
    fn comments<'a>(&'a self, post: &Post) -> RecordStream<'a, Comment>;

    /// Relevance-ranked profiles matching a free-text query.
    fn search_profiles<'a>(&'a self, query: &str) -> RecordStream<'a, ProfileHit>;
}
