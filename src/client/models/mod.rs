//! GitHub API data models
//!
//! Wire types returned by the GitHub REST API, deserialized as-is and then
//! normalized into [`crate::models::RepositoryCandidate`].

mod account;
mod repo;

pub use account::{Account, AccountKind};
pub use repo::GitHubRepository;
