//! Repository models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository as returned by the `.../repos` listing endpoints.
///
/// Only the fields GitGrab uses are modelled; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    /// Repository ID
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Owner-qualified name ("owner/name")
    pub full_name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Browser URL
    pub html_url: String,

    /// HTTPS clone URL
    pub clone_url: String,

    /// Size in kilobytes as reported by GitHub
    #[serde(default)]
    pub size: u64,

    /// Primary language
    #[serde(default)]
    pub language: Option<String>,

    /// Star count
    #[serde(default)]
    pub stargazers_count: u64,

    /// Fork count
    #[serde(default)]
    pub forks_count: u64,

    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
