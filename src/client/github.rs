//! GitHub REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{Account, GitHubApi, GitHubRepository, ListParams};
use crate::error::{ApiError, Result};

/// GitHub API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// REST API version pinned by the client
const API_VERSION: &str = "2022-11-28";

/// Header GitHub uses to report the remaining request budget
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

const USER_AGENT: &str = concat!("gitgrab/", env!("CARGO_PKG_VERSION"));

/// GitHub API client authenticated with a bearer token
pub struct GitHubClient {
    http: HttpClient,
    base_url: Url,
    token: String,
}

impl GitHubClient {
    /// Create a client for `api_host`, or the public GitHub API when `None`.
    pub fn with_host(token: String, api_host: Option<String>) -> Result<Self> {
        let base = api_host.unwrap_or_else(|| API_BASE_URL.to_string());
        let base_url = Url::parse(&base)
            .map_err(|e| ApiError::Network(format!("Invalid API host '{}': {}", base, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Network(format!("Invalid API host '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue an authenticated GET and decode the JSON body.
    ///
    /// `subject` names the user or organization a 404 refers to.
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
        subject: &str,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| {
                ApiError::Network(format!("Failed to parse response: {}", e))
            })?;
            return Ok(data);
        }

        Err(error_for_status(status, subject, response).await.into())
    }
}

/// Map a non-success response onto the API error taxonomy.
async fn error_for_status(status: StatusCode, subject: &str, response: Response) -> ApiError {
    let rate_limit_exhausted = response
        .headers()
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");

    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(subject.to_string()),
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
        StatusCode::FORBIDDEN if rate_limit_exhausted => ApiError::RateLimited,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        _ => {
            let message = response_message(response)
                .await
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
            ApiError::Network(format!("GitHub API returned {}: {}", status.as_u16(), message))
        }
    }
}

/// Extract the `message` field GitHub puts in error bodies.
async fn response_message(response: Response) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let text = response.text().await.ok()?;
    serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .ok()
        .or_else(|| (!text.trim().is_empty()).then(|| text.trim().to_string()))
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_org(&self, org: &str) -> Result<Account> {
        self.get(&["orgs", org], &[], org).await
    }

    async fn get_user(&self, username: &str) -> Result<Account> {
        self.get(&["users", username], &[], username).await
    }

    async fn list_org_repos(
        &self,
        org: &str,
        params: &ListParams,
    ) -> Result<Vec<GitHubRepository>> {
        self.get(&["orgs", org, "repos"], &params.to_query_params(), org)
            .await
    }

    async fn list_user_repos(
        &self,
        username: &str,
        params: &ListParams,
    ) -> Result<Vec<GitHubRepository>> {
        self.get(
            &["users", username, "repos"],
            &params.to_query_params(),
            username,
        )
        .await
    }
}
