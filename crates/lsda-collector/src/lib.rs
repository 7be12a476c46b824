//! Bounded collection of profile, post and search data from a social
//! platform.
//!
//! A run logs in through a [`SocialClient`], pulls at most K records from each
//! lazy upstream listing, projects them into fixed-schema records, and writes
//! every record to disk before returning the whole run to the caller. Comment
//! fetches for individual posts are guarded: a failure there empties that
//! post's comments instead of failing the run.

pub mod bound;
pub mod collector;
pub mod error;
pub mod guard;
pub mod http;
pub mod project;
pub mod record;
pub mod sink;
pub mod source;
pub mod types;

pub use bound::take_top_k;
pub use collector::Collector;
pub use error::{CollectError, SourceError};
pub use guard::{guard_nested, Outcome};
pub use http::{HttpSession, HttpSocialClient};
pub use record::{
    AccountSummary, DegradedItem, PostRecord, ProfileSearchResult, ScrapeRun, SearchRun,
};
pub use source::{RecordStream, SocialClient, SocialSession};
pub use types::{AccountAttrs, Comment, Location, Post, ProfileHit};
