//! Durable JSON persistence for collection runs.
//!
//! ## Layout
//!
//! ```text
//! {root}/{username}_top_{posts_bound}_recent_posts/
//!     {username}_account.json
//!     post_1.json
//!     post_2.json
//!     ...
//! {root}/search_results_{query}.json
//! ```
//!
//! Documents are UTF-8 JSON indented with four spaces. Any write failure is
//! returned as [`CollectError::Persist`]; nothing here is best-effort.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::CollectError;

const INDENT: &[u8] = b"    ";

/// Directory name for a scrape of `username` bounded to `posts_bound` posts.
#[must_use]
pub fn scrape_dir_name(username: &str, posts_bound: usize) -> String {
    format!("{username}_top_{posts_bound}_recent_posts")
}

#[must_use]
pub fn account_file_name(username: &str) -> String {
    format!("{username}_account.json")
}

/// File name for the post at 1-based `position`.
#[must_use]
pub fn post_file_name(position: usize) -> String {
    format!("post_{position}.json")
}

#[must_use]
pub fn search_file_name(query: &str) -> String {
    format!("search_results_{query}.json")
}

/// Checks that `input` can be embedded in a file name without escaping
/// its directory.
///
/// # Errors
///
/// Returns [`CollectError::InvalidInput`] for empty input, `.`/`..`, or
/// input containing a path separator or NUL.
pub fn validate_identifier(input: &str) -> Result<(), CollectError> {
    let reason = if input.trim().is_empty() {
        Some("must not be empty")
    } else if input == "." || input == ".." {
        Some("must not be a relative path component")
    } else if input.contains(['/', '\\', '\0']) {
        Some("must not contain path separators or NUL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CollectError::InvalidInput {
            input: input.to_owned(),
            reason: reason.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Serializes `value` as four-space-indented JSON.
///
/// # Errors
///
/// Returns [`CollectError::Serialize`] if `value` cannot be represented.
pub fn to_pretty_json<T: Serialize + ?Sized>(
    value: &T,
    context: &str,
) -> Result<Vec<u8>, CollectError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| CollectError::Serialize {
            context: context.to_owned(),
            source: e,
        })?;
    Ok(buf)
}

/// Writes `value` to `path`, replacing any previous file.
///
/// # Errors
///
/// Returns [`CollectError::Serialize`] or [`CollectError::Persist`].
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CollectError> {
    let bytes = to_pretty_json(value, &path.display().to_string())?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| CollectError::Persist {
            path: path.to_owned(),
            source: e,
        })
}

/// Output directory of one scrape run.
#[derive(Debug)]
pub struct RunSink {
    dir: PathBuf,
}

impl RunSink {
    /// Creates (or reuses) `dir`, including missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Persist`] if the directory cannot be created.
    pub async fn create(dir: PathBuf) -> Result<Self, CollectError> {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| CollectError::Persist {
                path: dir.clone(),
                source: e,
            })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one document named `file_name` inside the run directory and
    /// returns its full path.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Serialize`] or [`CollectError::Persist`].
    pub async fn persist<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<PathBuf, CollectError> {
        let path = self.dir.join(file_name);
        write_json(&path, value).await?;
        Ok(path)
    }

    #[must_use]
    pub fn into_dir(self) -> PathBuf {
        self.dir
    }
}
