//! GitHub API client

use async_trait::async_trait;

use crate::error::Result;

pub mod github;
pub mod listing;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use github::GitHubClient;
pub use listing::list_repositories;
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use models::{Account, AccountKind, GitHubRepository};
pub use pagination::{ListParams, MAX_PAGE_SIZE};

/// GitHub REST operations needed to list a user's or organization's repositories
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Look up an organization by login
    async fn get_org(&self, org: &str) -> Result<Account>;

    /// Look up a user by login
    async fn get_user(&self, username: &str) -> Result<Account>;

    /// List repositories owned by an organization
    async fn list_org_repos(&self, org: &str, params: &ListParams)
    -> Result<Vec<GitHubRepository>>;

    /// List repositories owned by a user
    async fn list_user_repos(
        &self,
        username: &str,
        params: &ListParams,
    ) -> Result<Vec<GitHubRepository>>;
}
