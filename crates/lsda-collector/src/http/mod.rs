//! HTTP implementation of [`SocialClient`] for the JSON profile API.
//!
//! Endpoints (relative to the configured base URL):
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `POST` | `login` | `{"token": "..."}` |
//! | `GET`  | `users/{username}` | [`AccountAttrs`] |
//! | `GET`  | `users/{username}/posts` | page of [`Post`] |
//! | `GET`  | `posts/{id}/comments` | page of [`Comment`] |
//! | `GET`  | `search/profiles?query=...` | page of [`ProfileHit`] |
//!
//! Listings are fetched one page at a time, only when the consumer pulls past
//! the current page, by following each page's `Link: <...>; rel="next"` URL. There is no retry: a 429 surfaces immediately as
//! [`SourceError::RateLimited`].

mod pagination;

use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use lsda_core::{AppConfig, Credentials};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::source::{RecordStream, SocialClient, SocialSession};
use crate::types::{AccountAttrs, Comment, Page, Post, ProfileHit};

pub use pagination::next_page_url;

/// Maximum number of pages followed for one listing.
pub(crate) const MAX_PAGES: usize = 200;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Unauthenticated entry point to the profile API.
pub struct HttpSocialClient {
    client: Client,
    base_url: Url,
}

impl HttpSocialClient {
    /// Creates a client from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `social_api_url` is unset or
    /// malformed, or [`SourceError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SourceError> {
        let base_url = config
            .social_api_url
            .as_deref()
            .ok_or_else(|| SourceError::InvalidBaseUrl {
                base_url: String::new(),
                reason: "LSDA_SOCIAL_API_URL is not set".to_owned(),
            })?;
        Self::with_base_url(base_url, config.request_timeout_secs, &config.user_agent)
    }

    /// Creates a client against an explicit base URL (e.g. a wiremock server).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `base_url` cannot be parsed,
    /// or [`SourceError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps `path_segments_mut` appending below the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl SocialClient for HttpSocialClient {
    type Session = HttpSession;

    async fn login(&self, credentials: &Credentials) -> Result<HttpSession, SourceError> {
        let url = endpoint(&self.base_url, &["login"], &[])?;
        let request = self.client.post(url.clone()).json(&LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        });
        let (login, _): (LoginResponse, _) = fetch_json(request, &url, "login response").await?;

        Ok(HttpSession {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: login.token,
        })
    }
}

/// Authenticated session; every request carries the bearer token.
pub struct HttpSession {
    client: Client,
    base_url: Url,
    token: String,
}

impl HttpSession {
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<(T, Option<String>), SourceError> {
        let request = self.client.get(url.clone()).bearer_auth(&self.token);
        fetch_json(request, &url, context).await
    }

    /// Streams every item of a paginated listing, one page per pull.
    ///
    /// Each following page is requested at the `rel="next"` URL of the page
    /// before it. That URL must stay on the origin of the first request;
    /// the bearer token goes with it.
    fn paginate<'a, T>(
        &'a self,
        segments: &[&str],
        query: &[(&str, &str)],
        context: String,
    ) -> RecordStream<'a, T>
    where
        T: DeserializeOwned + Send + 'a,
    {
        let first = match endpoint(&self.base_url, segments, query) {
            Ok(url) => url,
            Err(e) => return stream::once(async move { Err(e) }).boxed(),
        };
        let origin = first.origin();

        let start = PageState::Next {
            url: first,
            fetched: 0,
        };
        let pages = stream::try_unfold(start, move |state| {
            let context = context.clone();
            let origin = origin.clone();
            async move {
                let PageState::Next { url, fetched } = state else {
                    return Ok(None);
                };
                if fetched >= MAX_PAGES {
                    return Err(SourceError::PaginationLimit {
                        url: url.to_string(),
                        max_pages: MAX_PAGES,
                    });
                }
                if url.origin() != origin {
                    return Err(SourceError::ForeignPageLink {
                        url: url.to_string(),
                    });
                }

                let (page, link_header): (Page<T>, _) =
                    self.get_json(url.clone(), &context).await?;
                let next = match next_page_url(link_header.as_deref(), &url) {
                    Some(url) => PageState::Next {
                        url,
                        fetched: fetched + 1,
                    },
                    None => PageState::Done,
                };
                Ok::<_, SourceError>(Some((page.items, next)))
            }
        });

        pages
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, SourceError>)))
            .try_flatten()
            .boxed()
    }
}

enum PageState {
    Next { url: Url, fetched: usize },
    Done,
}

impl SocialSession for HttpSession {
    async fn lookup_profile(&self, username: &str) -> Result<AccountAttrs, SourceError> {
        let url = endpoint(&self.base_url, &["users", username], &[])?;
        let (attrs, _) = self.get_json(url, &format!("profile {username}")).await?;
        Ok(attrs)
    }

    fn posts<'a>(&'a self, account: &AccountAttrs) -> RecordStream<'a, Post> {
        let username = account.username.as_str();
        self.paginate(
            &["users", username, "posts"],
            &[],
            format!("posts page of {username}"),
        )
    }

    fn comments<'a>(&'a self, post: &Post) -> RecordStream<'a, Comment> {
        self.paginate(
            &["posts", post.id.as_str(), "comments"],
            &[],
            format!("comments page of post {}", post.id),
        )
    }

    fn search_profiles<'a>(&'a self, query: &str) -> RecordStream<'a, ProfileHit> {
        self.paginate(
            &["search", "profiles"],
            &[("query", query)],
            format!("search page for \"{query}\""),
        )
    }
}

/// Builds `{base}/{segments...}?{query...}` with each segment percent-encoded.
fn endpoint(base: &Url, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, SourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::InvalidBaseUrl {
            base_url: base.to_string(),
            reason: "URL cannot be used as a base".to_owned(),
        })?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Sends `request`, maps non-2xx statuses to typed errors, and parses the
/// body. Returns the `Link` header alongside the parsed value.
async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &Url,
    context: &str,
) -> Result<(T, Option<String>), SourceError> {
    let response = check_status(request.send().await?, url)?;

    // Extract the Link header before consuming the response body.
    let link_header = response
        .headers()
        .get(reqwest::header::LINK)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let body = response.text().await?;
    let parsed = serde_json::from_str::<T>(&body).map_err(|e| SourceError::Deserialize {
        context: context.to_owned(),
        source: e,
    })?;

    Ok((parsed, link_header))
}

fn check_status(response: Response, url: &Url) -> Result<Response, SourceError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);
        return Err(SourceError::RateLimited { retry_after_secs });
    }

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(SourceError::Unauthorized {
            status: status.as_u16(),
        });
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(SourceError::NotFound {
            url: url.to_string(),
        });
    }

    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response)
}

#[cfg(test)]
#[path = "../http_test.rs"]
mod tests;
