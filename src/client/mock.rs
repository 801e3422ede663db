//! Mock GitHub API client for testing
//!
//! Provides an in-memory implementation of [`GitHubApi`] so listing logic can
//! be tested without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{Account, GitHubApi, GitHubRepository, ListParams};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure known accounts and responses via builder methods.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_org("acme")
///     .with_org_repos(vec![sample_repo("alpha")]);
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    /// Login that resolves as an organization
    org: Option<String>,
    /// Login that resolves as a user
    user: Option<String>,
    /// Repositories returned by list_org_repos
    org_repos: Vec<GitHubRepository>,
    /// Repositories returned by list_user_repos
    user_repos: Vec<GitHubRepository>,
    /// Error returned by get_user - consumed on first use
    user_error: Arc<Mutex<Option<ApiError>>>,
    /// Error returned by either listing call - consumed on first use
    listing_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Parameters of the most recent listing call
    last_params: Arc<Mutex<Option<ListParams>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_org: usize,
    pub get_user: usize,
    pub list_org_repos: usize,
    pub list_user_repos: usize,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org(mut self, login: &str) -> Self {
        self.org = Some(login.to_string());
        self
    }

    pub fn with_user(mut self, login: &str) -> Self {
        self.user = Some(login.to_string());
        self
    }

    pub fn with_org_repos(mut self, repos: Vec<GitHubRepository>) -> Self {
        self.org_repos = repos;
        self
    }

    pub fn with_user_repos(mut self, repos: Vec<GitHubRepository>) -> Self {
        self.user_repos = repos;
        self
    }

    pub fn with_user_error(self, error: ApiError) -> Self {
        *self.user_error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub fn with_listing_error(self, error: ApiError) -> Self {
        *self.listing_error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn last_params(&self) -> Option<ListParams> {
        self.last_params.lock().await.clone()
    }

    async fn listing(
        &self,
        repos: &[GitHubRepository],
        params: &ListParams,
    ) -> Result<Vec<GitHubRepository>> {
        *self.last_params.lock().await = Some(params.clone());
        if let Some(err) = self.listing_error.lock().await.take() {
            return Err(err.into());
        }
        Ok(repos.to_vec())
    }
}

fn account(id: u64, login: &str, kind: &str) -> Account {
    Account {
        id,
        login: login.to_string(),
        account_type: Some(kind.to_string()),
    }
}

/// A minimal repository record named `name`, owned by "acme"
pub fn sample_repo(name: &str) -> GitHubRepository {
    GitHubRepository {
        id: name.len() as u64,
        name: name.to_string(),
        full_name: format!("acme/{}", name),
        description: Some(format!("The {} repository", name)),
        html_url: format!("https://github.com/acme/{}", name),
        clone_url: format!("https://github.com/acme/{}.git", name),
        size: 64,
        language: Some("Rust".to_string()),
        stargazers_count: 1,
        forks_count: 0,
        created_at: None,
        updated_at: None,
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn get_org(&self, org: &str) -> Result<Account> {
        self.call_count.lock().await.get_org += 1;
        match self.org.as_deref() {
            Some(login) if login == org => Ok(account(1, org, "Organization")),
            _ => Err(ApiError::NotFound(org.to_string()).into()),
        }
    }

    async fn get_user(&self, username: &str) -> Result<Account> {
        self.call_count.lock().await.get_user += 1;
        if let Some(err) = self.user_error.lock().await.take() {
            return Err(err.into());
        }
        match self.user.as_deref() {
            Some(login) if login == username => Ok(account(2, username, "User")),
            _ => Err(ApiError::NotFound(username.to_string()).into()),
        }
    }

    async fn list_org_repos(
        &self,
        _org: &str,
        params: &ListParams,
    ) -> Result<Vec<GitHubRepository>> {
        self.call_count.lock().await.list_org_repos += 1;
        self.listing(&self.org_repos, params).await
    }

    async fn list_user_repos(
        &self,
        _username: &str,
        params: &ListParams,
    ) -> Result<Vec<GitHubRepository>> {
        self.call_count.lock().await.list_user_repos += 1;
        self.listing(&self.user_repos, params).await
    }
}
