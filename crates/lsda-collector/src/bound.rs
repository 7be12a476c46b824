//! Top-K bounding over lazy upstream sequences.

use futures::{Stream, StreamExt};

/// Pulls at most `k` leading items from `source`.
///
/// Stops polling as soon as `k` items are held, so a paginated source never
/// fetches the page after the one that satisfied the bound. `k == 0` returns
/// an empty `Vec` without polling at all. A source shorter than `k` simply
/// yields everything it has.
///
/// # Errors
///
/// Returns the first error the source yields; items pulled before it are
/// discarded.
pub async fn take_top_k<S, T, E>(mut source: S, k: usize) -> Result<Vec<T>, E>
where
    S: Stream<Item = Result<T, E>> + Unpin,
{
    let mut kept = Vec::new();
    while kept.len() < k {
        match source.next().await {
            Some(item) => kept.push(item?),
            None => break,
        }
    }
    Ok(kept)
}
