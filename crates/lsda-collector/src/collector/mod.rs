//! The Bounded Collector: authenticate, bound, project, persist.

mod scrape;
mod search;

use std::path::{Path, PathBuf};

use tracing::Dispatch;

use crate::error::{CollectError, SourceError};
use crate::source::SocialClient;

/// Runs bounded collections against one [`SocialClient`].
///
/// Each run owns its own session and output location; the collector holds no
/// state between runs. Logging goes to the injected [`Dispatch`], which is a
/// no-op unless [`Collector::with_dispatch`] supplies one.
pub struct Collector<C> {
    client: C,
    output_root: PathBuf,
    dispatch: Dispatch,
}

impl<C: SocialClient> Collector<C> {
    /// Creates a collector writing under `output_root`.
    pub fn new(client: C, output_root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_root: output_root.into(),
            dispatch: Dispatch::none(),
        }
    }

    /// Routes every run's log events to `dispatch`.
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Maps a failed profile lookup to the run-level error kind.
fn lookup_error(username: &str, source: SourceError) -> CollectError {
    match source {
        SourceError::NotFound { .. } => CollectError::InvalidInput {
            input: username.to_owned(),
            reason: "profile does not exist".to_owned(),
        },
        source => CollectError::Fetch {
            context: format!("profile {username}"),
            source,
        },
    }
}
