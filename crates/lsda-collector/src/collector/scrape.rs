//! Profile scrape: account summary plus the most recent posts with their
//! leading comments.

use lsda_core::Credentials;
use tracing::instrument::WithSubscriber;

use crate::bound::take_top_k;
use crate::error::CollectError;
use crate::guard::{guard_nested, Outcome};
use crate::project::{project_account, project_post};
use crate::record::{DegradedItem, ScrapeRun};
use crate::sink::{
    account_file_name, post_file_name, scrape_dir_name, validate_identifier, RunSink,
};
use crate::source::{SocialClient, SocialSession};

use super::{lookup_error, Collector};

impl<C: SocialClient> Collector<C> {
    /// Scrapes `username`: its account summary, its `posts_bound` most recent
    /// posts, and up to `comments_bound` comment candidates per post.
    ///
    /// Writes `{username}_account.json` and `post_{n}.json` into
    /// `{root}/{username}_top_{posts_bound}_recent_posts/` as it goes.
    ///
    /// A failed comment fetch degrades that post's `top_comments` to empty
    /// and is reported in [`ScrapeRun::degraded`]; it never fails the run.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Precondition`]: credentials are empty; nothing is contacted.
    /// - [`CollectError::InvalidInput`]: `username` is unusable or unknown upstream.
    /// - [`CollectError::Authentication`]: the login was rejected.
    /// - [`CollectError::Fetch`]: the profile or post listing failed.
    /// - [`CollectError::Persist`] / [`CollectError::Serialize`]: a file could not be written.
    pub async fn scrape(
        &self,
        credentials: &Credentials,
        username: &str,
        posts_bound: usize,
        comments_bound: usize,
    ) -> Result<ScrapeRun, CollectError> {
        self.scrape_inner(credentials, username, posts_bound, comments_bound)
            .with_subscriber(self.dispatch.clone())
            .await
    }

    async fn scrape_inner(
        &self,
        credentials: &Credentials,
        username: &str,
        posts_bound: usize,
        comments_bound: usize,
    ) -> Result<ScrapeRun, CollectError> {
        credentials.ensure_present()?;
        validate_identifier(username)?;

        let session = self
            .client
            .login(credentials)
            .await
            .map_err(|source| CollectError::Authentication {
                username: credentials.username.clone(),
                source,
            })?;
        tracing::info!(login = %credentials.username, "logged in");

        let attrs = session
            .lookup_profile(username)
            .await
            .map_err(|e| lookup_error(username, e))?;

        let dir = self.output_root.join(scrape_dir_name(username, posts_bound));
        let sink = RunSink::create(dir).await?;

        let account = project_account(&attrs);
        sink.persist(&account_file_name(username), &account).await?;

        let posts = take_top_k(session.posts(&attrs), posts_bound)
            .await
            .map_err(|source| CollectError::Fetch {
                context: format!("posts of {username}"),
                source,
            })?;
        let total = posts.len();
        tracing::info!(username, count = total, "found recent posts");

        let mut records = Vec::with_capacity(total);
        let mut degraded = Vec::new();

        for (idx, post) in posts.iter().enumerate() {
            let position = idx + 1;
            tracing::info!(username, position, total, "processing post");

            let context = format!("comments of post {position}");
            let comments = match guard_nested(
                &context,
                take_top_k(session.comments(post), comments_bound),
            )
            .await
            {
                Outcome::Complete(comments) => comments,
                Outcome::Degraded { fallback, cause } => {
                    degraded.push(DegradedItem {
                        position,
                        reason: cause.to_string(),
                    });
                    fallback
                }
            };

            let record = project_post(post, &comments);
            let path = sink.persist(&post_file_name(position), &record).await?;
            tracing::info!(position, path = %path.display(), "post saved");
            records.push(record);
        }

        tracing::info!(
            username,
            processed = records.len(),
            degraded = degraded.len(),
            directory = %sink.dir().display(),
            "scrape complete"
        );

        Ok(ScrapeRun {
            directory: sink.into_dir(),
            account,
            posts: records,
            degraded,
        })
    }
}
