//! Acquisition result model

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::RepositoryCandidate;

/// What happened to one selected repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Freshly cloned into the destination
    Cloned { commit_count: u64, size_on_disk: u64 },

    /// A working copy was already present and left untouched
    Existing { commit_count: u64, size_on_disk: u64 },

    /// The clone or the post-clone inspection failed
    Failed { error: String },
}

/// Outcome discriminant, used for counting and colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquisitionStatus {
    Cloned,
    Existing,
    Failed,
}

impl AcquisitionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AcquisitionStatus::Cloned => "cloned",
            AcquisitionStatus::Existing => "existing",
            AcquisitionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for AcquisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn status(&self) -> AcquisitionStatus {
        match self {
            Outcome::Cloned { .. } => AcquisitionStatus::Cloned,
            Outcome::Existing { .. } => AcquisitionStatus::Existing,
            Outcome::Failed { .. } => AcquisitionStatus::Failed,
        }
    }
}

/// A candidate together with the outcome of acquiring it.
///
/// Built once by the cloner and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcquisitionResult {
    #[serde(flatten)]
    pub repo: RepositoryCandidate,

    /// Local path the repository was assigned
    pub path: PathBuf,

    #[serde(flatten)]
    pub outcome: Outcome,
}

impl AcquisitionResult {
    pub fn new(repo: RepositoryCandidate, path: PathBuf, outcome: Outcome) -> Self {
        Self {
            repo,
            path,
            outcome,
        }
    }

    pub fn status(&self) -> AcquisitionStatus {
        self.outcome.status()
    }

    /// Commit count, present for cloned and existing repositories
    pub fn commit_count(&self) -> Option<u64> {
        match self.outcome {
            Outcome::Cloned { commit_count, .. } | Outcome::Existing { commit_count, .. } => {
                Some(commit_count)
            }
            Outcome::Failed { .. } => None,
        }
    }

    /// On-disk size in kilobytes, present for cloned and existing repositories
    pub fn size_on_disk(&self) -> Option<u64> {
        match self.outcome {
            Outcome::Cloned { size_on_disk, .. } | Outcome::Existing { size_on_disk, .. } => {
                Some(size_on_disk)
            }
            Outcome::Failed { .. } => None,
        }
    }

    /// Error message, present only for failed repositories
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { error } => Some(error),
            _ => None,
        }
    }
}
