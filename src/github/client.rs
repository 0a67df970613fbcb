use std::future::Future;

use anyhow::{Context, Result, bail};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Request, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::error::{FetchError, USER_NOT_FOUND};
use super::models::{Profile, Repository, Snapshot};

/// Most repositories a single listing request may return.
pub const REPOS_PER_REQUEST: u32 = 100;

/// The two lookups a search needs. Implemented over HTTP by [`GithubClient`].
pub trait GithubApi {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, FetchError>> + Send;

    fn fetch_repositories(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<Repository>, FetchError>> + Send;
}

/// Trim the username field, rejecting blank input before any request is made.
pub fn validate_username(input: &str) -> Result<&str, FetchError> {
    let username = input.trim();
    if username.is_empty() {
        return Err(FetchError::BlankUsername);
    }
    Ok(username)
}

/// Profile first, then repositories only if the profile lookup succeeded.
/// Either failure discards the whole attempt.
pub async fn fetch_snapshot<A>(api: &A, username: &str) -> Result<Snapshot, FetchError>
where
    A: GithubApi + Sync,
{
    let profile = api.fetch_profile(username).await?;
    let repos = api.fetch_repositories(username).await?;
    debug!(login = %profile.login, count = repos.len(), "Fetched snapshot");
    Ok(Snapshot { profile, repos })
}

/// Interpret the profile endpoint's response.
///
/// A non-success status surfaces the API's `message` field, falling back to
/// "User not found" when the body has none.
pub fn parse_profile_response(status: StatusCode, body: &str) -> Result<Profile, FetchError> {
    if !status.is_success() {
        let data: Value = serde_json::from_str(body)?;
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(USER_NOT_FOUND);
        return Err(FetchError::Profile(message.to_string()));
    }
    Ok(serde_json::from_str(body)?)
}

/// Interpret the repository listing response. The error body is never read.
pub fn parse_repositories_response(
    status: StatusCode,
    body: &str,
) -> Result<Vec<Repository>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Repositories);
    }
    Ok(serde_json::from_str(body)?)
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
    token: String,
}

impl GithubClient {
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        if !api_url.starts_with("https://") {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }
        let api_url = Url::parse(api_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", api_url))?;

        let client = Client::builder()
            .user_agent("ghfinder")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            token: token.to_string(),
        })
    }

    /// `{api_url}/users/{username}[/repos]`, with the username as one
    /// escaped path segment.
    pub fn user_url(&self, username: &str, repos: bool) -> Result<Url, FetchError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::Transport(format!("Invalid API URL: {}", self.api_url)))?;
            segments.pop_if_empty().extend(["users", username]);
            if repos {
                segments.push("repos");
            }
        }
        if repos {
            url.query_pairs_mut()
                .append_pair("per_page", &REPOS_PER_REQUEST.to_string())
                .append_pair("sort", "updated");
        }
        Ok(url)
    }

    /// A GET for `url` carrying the token and media-type headers.
    pub fn build_request(&self, url: Url) -> reqwest::Result<Request> {
        self.client
            .get(url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .build()
    }

    async fn get(&self, url: Url) -> Result<(StatusCode, String), FetchError> {
        debug!(url = %url, "GET");
        let request = self.build_request(url)?;
        let resp = self.client.execute(request).await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = %status, bytes = body.len(), "Response received");
        Ok((status, body))
    }
}

impl GithubApi for GithubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError> {
        let url = self.user_url(username, false)?;
        let (status, body) = self.get(url).await?;
        parse_profile_response(status, &body)
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let url = self.user_url(username, true)?;
        let (status, body) = self.get(url).await?;
        parse_repositories_response(status, &body)
    }
}
