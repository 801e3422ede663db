//! Fake git backend for testing
//!
//! Simulates clones by writing a small working copy to disk so sizing and
//! existence checks behave as they would after a real clone.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{GitBackend, WORKING_COPY_MARKER};
use crate::error::GitError;

enum CloneBehavior {
    Succeed { bytes: usize, commits: u64 },
    Fail(String),
}

/// Scripted [`GitBackend`] keyed by clone URL
#[derive(Default)]
pub struct FakeGit {
    clones: HashMap<String, CloneBehavior>,
    count_failures: HashMap<String, String>,
    commits: RefCell<HashMap<PathBuf, Result<u64, String>>>,
    cloned: RefCell<Vec<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cloning `url` succeeds, writing `bytes` of content with `commits` commits.
    pub fn clone_succeeds(mut self, url: &str, bytes: usize, commits: u64) -> Self {
        self.clones
            .insert(url.to_string(), CloneBehavior::Succeed { bytes, commits });
        self
    }

    /// Cloning `url` fails with `message`.
    pub fn clone_fails(mut self, url: &str, message: &str) -> Self {
        self.clones
            .insert(url.to_string(), CloneBehavior::Fail(message.to_string()));
        self
    }

    /// Counting commits of the clone of `url` fails with `message`.
    pub fn commit_count_fails(mut self, url: &str, message: &str) -> Self {
        self.count_failures
            .insert(url.to_string(), message.to_string());
        self
    }

    /// Report `commits` for a working copy created outside the fake.
    pub fn with_commits(self, path: &Path, commits: u64) -> Self {
        self.commits
            .borrow_mut()
            .insert(path.to_path_buf(), Ok(commits));
        self
    }

    /// URLs passed to `clone_repo`, in call order
    pub fn cloned_urls(&self) -> Vec<String> {
        self.cloned.borrow().clone()
    }
}

impl GitBackend for FakeGit {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        self.cloned.borrow_mut().push(url.to_string());

        let (bytes, commits) = match self.clones.get(url) {
            Some(CloneBehavior::Succeed { bytes, commits }) => (*bytes, *commits),
            Some(CloneBehavior::Fail(message)) => return Err(GitError::Failed(message.clone())),
            None => return Err(GitError::Failed(format!("unexpected clone of {}", url))),
        };

        let marker = dest.join(WORKING_COPY_MARKER);
        fs::create_dir_all(&marker)?;
        fs::write(marker.join("HEAD"), "ref: refs/heads/main\n")?;
        fs::write(dest.join("README.md"), vec![b'#'; bytes])?;

        let count = match self.count_failures.get(url) {
            Some(message) => Err(message.clone()),
            None => Ok(commits),
        };
        self.commits.borrow_mut().insert(dest.to_path_buf(), count);
        Ok(())
    }

    fn commit_count(&self, repo: &Path) -> Result<u64, GitError> {
        match self.commits.borrow().get(repo) {
            Some(Ok(count)) => Ok(*count),
            Some(Err(message)) => Err(GitError::Failed(message.clone())),
            None => Err(GitError::Failed(format!(
                "fatal: not a git repository: {}",
                repo.display()
            ))),
        }
    }
}
