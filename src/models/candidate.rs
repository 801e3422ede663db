//! Repository candidate model

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::models::GitHubRepository;

/// Placeholder for repositories without a description
pub const NO_DESCRIPTION: &str = "No description";

/// Placeholder for repositories without a detected language
pub const NO_LANGUAGE: &str = "Not specified";

/// A repository listed remotely but not yet acted upon locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCandidate {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub url: String,
    pub clone_url: String,
    /// Remote-reported size in kilobytes
    pub size: u64,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepositoryCandidate {
    /// Label shown in the selection prompt
    pub fn selection_label(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.description)
        }
    }
}

impl From<GitHubRepository> for RepositoryCandidate {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: repo.html_url,
            clone_url: repo.clone_url,
            size: repo.size,
            language: repo
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| NO_LANGUAGE.to_string()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}
