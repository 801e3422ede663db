//! Error types for the GitGrab CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for GitGrab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Error preparing repository directory {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl Error {
    /// Wrap an I/O error that happened while preparing `path`.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Guidance printed after the error message, if the operator can fix it.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Error::Input(err) => err.remediation(),
            _ => None,
        }
    }
}

/// Invalid operator input, always reported before any network or filesystem work
#[derive(Debug, Error)]
pub enum InputError {
    #[error("GitHub token not found")]
    MissingToken,

    #[error("Invalid GitHub token format")]
    InvalidToken,

    #[error("Limit must be a positive number (got '{0}')")]
    InvalidLimit(String),

    #[error("A directory named '{}' already exists", .0.display())]
    DirectoryExists(PathBuf),
}

const MISSING_TOKEN_HELP: &str = "\
To use GitGrab, you need a GitHub Personal Access Token. This is required for:
  - Accessing private repositories
  - Avoiding rate limits with the GitHub API
  - Ensuring proper authentication

You can create a token by following these steps:
  1. Visit: https://github.com/settings/tokens
  2. Click \"Generate new token\" and confirm your password
  3. Give your token a name (e.g., \"GitGrab CLI\")
  4. Select at least the \"repo\" scope
  5. Click \"Generate token\" and copy your new token

Then, you can use your token in one of two ways:
  - Pass it as a command-line option: gitgrab <username> --token YOUR_TOKEN
  - Store it in a .env file in your working directory:
    GITHUB_TOKEN=your_token_here";

const INVALID_TOKEN_HELP: &str = "\
Your GitHub token appears to be incorrectly formatted.
GitHub tokens should follow one of these formats:
  - Fine-grained personal access tokens: github_pat_*
  - Classic personal access tokens: ghp_*

Please double-check your token and try again.";

impl InputError {
    /// Operator-facing remediation text for this error.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            InputError::MissingToken => Some(MISSING_TOKEN_HELP),
            InputError::InvalidToken => Some(INVALID_TOKEN_HELP),
            InputError::InvalidLimit(_) => {
                Some("Please provide a valid number for the --limit option")
            }
            InputError::DirectoryExists(_) => {
                Some("Please run the application again with a different directory name.")
            }
        }
    }
}

/// GitHub API errors raised while listing repositories
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check your GitHub token")]
    Unauthenticated,

    #[error("User or organization '{0}' not found")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded. Please use a valid token or wait before trying again")]
    RateLimited,

    #[error("Failed to fetch repositories: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the GitHub API".to_string())
        } else if err.is_decode() {
            ApiError::Network(format!("Failed to parse response: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failures while acquiring a single repository.
///
/// These never abort the pipeline; they are captured into the
/// repository's result.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("{0}")]
    Failed(String),

    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Unexpected commit count output: '{0}'")]
    InvalidCount(String),

    #[error("Duplicate repository name '{0}' in selection")]
    DuplicateName(String),
}
