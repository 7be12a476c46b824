//! Partial-failure isolation for nested sub-collection fetches.

use std::future::Future;

use crate::error::SourceError;

/// Result of a guarded nested fetch.
///
/// Fatal failures travel as `Err(CollectError)` through the run; a guarded
/// fetch can only complete or degrade, and the degraded case carries both
/// the substituted value and the failure that caused it.
#[derive(Debug)]
pub enum Outcome<T> {
    Complete(T),
    Degraded { fallback: T, cause: SourceError },
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    /// Returns the value, whether fetched or substituted.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Complete(value) | Outcome::Degraded { fallback: value, .. } => value,
        }
    }
}

/// Awaits exactly one nested fetch, substituting `T::default()` on failure.
///
/// Makes a single attempt: no retry, no backoff. The failure is logged as a
/// warning under `context` and handed back in [`Outcome::Degraded`].
pub async fn guard_nested<T, F>(context: &str, fetch: F) -> Outcome<T>
where
    T: Default,
    F: Future<Output = Result<T, SourceError>>,
{
    match fetch.await {
        Ok(value) => Outcome::Complete(value),
        Err(cause) => {
            tracing::warn!(context, error = %cause, "nested fetch failed; continuing with empty result");
            Outcome::Degraded {
                fallback: T::default(),
                cause,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_passes_value_through() {
        let outcome = guard_nested("comments for post 1", async {
            Ok::<_, SourceError>(vec!["a".to_owned()])
        })
        .await;
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.into_value(), vec!["a".to_owned()]);
    }

    #[tokio::test]
    async fn failure_degrades_to_empty() {
        let outcome: Outcome<Vec<String>> = guard_nested("comments for post 2", async {
            Err(SourceError::Other("connection reset".to_owned()))
        })
        .await;
        assert!(outcome.is_degraded());
        match outcome {
            Outcome::Degraded { fallback, cause } => {
                assert!(fallback.is_empty());
                assert!(matches!(cause, SourceError::Other(ref m) if m == "connection reset"));
            }
            Outcome::Complete(_) => panic!("expected degraded outcome"),
        }
    }

    #[tokio::test]
    async fn fetch_is_attempted_once() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let calls = AtomicU32::new(0);
        let outcome: Outcome<Vec<u8>> = guard_nested("comments", async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(SourceError::Other("down".to_owned()))
        })
        .await;
        assert!(outcome.is_degraded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
