//! Profile search: the top-ranked profiles for a free-text query.

use lsda_core::Credentials;
use tracing::instrument::WithSubscriber;

use crate::bound::take_top_k;
use crate::error::CollectError;
use crate::project::project_search_hit;
use crate::record::{ProfileSearchResult, SearchRun};
use crate::sink::{search_file_name, validate_identifier, write_json};
use crate::source::{SocialClient, SocialSession};

use super::Collector;

impl<C: SocialClient> Collector<C> {
    /// Searches profiles for `query`, keeps the first `top_results` hits in
    /// upstream rank order, and writes them as one array to
    /// `{root}/search_results_{query}.json`.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Precondition`]: credentials are empty; nothing is contacted.
    /// - [`CollectError::InvalidInput`]: `query` cannot be used in a file name.
    /// - [`CollectError::Authentication`]: the login was rejected.
    /// - [`CollectError::Fetch`]: the search listing failed.
    /// - [`CollectError::Persist`] / [`CollectError::Serialize`]: the file could not be written.
    pub async fn search(
        &self,
        credentials: &Credentials,
        query: &str,
        top_results: usize,
    ) -> Result<SearchRun, CollectError> {
        self.search_inner(credentials, query, top_results)
            .with_subscriber(self.dispatch.clone())
            .await
    }

    async fn search_inner(
        &self,
        credentials: &Credentials,
        query: &str,
        top_results: usize,
    ) -> Result<SearchRun, CollectError> {
        credentials.ensure_present()?;
        validate_identifier(query)?;

        let session = self
            .client
            .login(credentials)
            .await
            .map_err(|source| CollectError::Authentication {
                username: credentials.username.clone(),
                source,
            })?;
        tracing::info!(login = %credentials.username, "logged in");

        let hits = take_top_k(session.search_profiles(query), top_results)
            .await
            .map_err(|source| CollectError::Fetch {
                context: format!("search results for \"{query}\""),
                source,
            })?;

        let results: Vec<ProfileSearchResult> = hits
            .iter()
            .map(|hit| {
                let result = project_search_hit(hit);
                tracing::debug!(query, username = %result.username, "search hit");
                result
            })
            .collect();

        tokio::fs::create_dir_all(&self.output_root)
            .await
            .map_err(|e| CollectError::Persist {
                path: self.output_root.clone(),
                source: e,
            })?;
        let path = self.output_root.join(search_file_name(query));
        write_json(&path, &results).await?;
        tracing::info!(
            query,
            count = results.len(),
            path = %path.display(),
            "search results saved"
        );

        Ok(SearchRun { path, results })
    }
}
