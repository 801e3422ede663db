//! Repository acquisition
//!
//! For each selected candidate: reuse an existing working copy, replace a
//! stale non-git directory, or clone fresh, then measure the result. Failures
//! are recorded per repository and never stop the loop.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::error::GitError;
use crate::models::{AcquisitionResult, Outcome, RepositoryCandidate};
use crate::output::progress::Spinner;

pub mod command;
#[cfg(test)]
pub mod mock;
pub mod size;

pub use command::GitCli;
#[cfg(test)]
pub use mock::FakeGit;
pub use size::{bytes_to_kb, dir_size};

/// Entry whose presence marks a directory as a working copy
pub const WORKING_COPY_MARKER: &str = ".git";

/// Source-control operations the acquisition loop depends on
pub trait GitBackend {
    /// Clone `url` into `dest`, which must not exist yet.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError>;

    /// Number of commits reachable from HEAD of the working copy at `repo`.
    fn commit_count(&self, repo: &Path) -> Result<u64, GitError>;
}

/// Acquire every candidate into `root/<name>`, in order.
///
/// Exactly one result is produced per candidate. When two candidates share a
/// name, only the first is acquired; later ones are reported as failed.
pub fn acquire<G>(git: &G, selected: &[RepositoryCandidate], root: &Path) -> Vec<AcquisitionResult>
where
    G: GitBackend + ?Sized,
{
    if selected.is_empty() {
        return Vec::new();
    }

    eprintln!(
        "\n{}\n",
        format!(
            "Cloning {} repositories to {}...",
            selected.len(),
            root.display()
        )
        .bold()
        .blue()
    );

    let mut seen = HashSet::new();
    let mut results = Vec::with_capacity(selected.len());

    for candidate in selected {
        let path = root.join(&candidate.name);
        let spinner = Spinner::start(format!("Cloning {}...", candidate.name));

        let outcome = if seen.insert(candidate.name.as_str()) {
            acquire_one(git, candidate, &path, &spinner)
                .unwrap_or_else(|err| Outcome::Failed {
                    error: err.to_string(),
                })
        } else {
            Outcome::Failed {
                error: GitError::DuplicateName(candidate.name.clone()).to_string(),
            }
        };

        match &outcome {
            Outcome::Cloned { .. } => {
                spinner.succeed(format!("Cloned {} successfully", candidate.name))
            }
            Outcome::Existing { .. } => spinner.warn(format!(
                "Repository {} already exists at {}",
                candidate.name,
                path.display()
            )),
            Outcome::Failed { error } => {
                spinner.fail(format!("Failed to clone {}: {}", candidate.name, error))
            }
        }

        results.push(AcquisitionResult::new(candidate.clone(), path, outcome));
    }

    results
}

/// Run the per-repository state machine.
fn acquire_one<G>(
    git: &G,
    candidate: &RepositoryCandidate,
    path: &Path,
    spinner: &Spinner,
) -> Result<Outcome, GitError>
where
    G: GitBackend + ?Sized,
{
    if path.symlink_metadata().is_ok() {
        if path.join(WORKING_COPY_MARKER).exists() {
            debug!("{} is already a working copy", path.display());
            let (commit_count, size_on_disk) = inspect(git, path)?;
            return Ok(Outcome::Existing {
                commit_count,
                size_on_disk,
            });
        }

        debug!(
            "{} exists but is not a git repository, removing it",
            path.display()
        );
        spinner.set_message(format!(
            "Directory {} exists but is not a git repository. Removing...",
            path.display()
        ));
        remove_path(path)?;
    }

    debug!("Cloning {} into {}", candidate.clone_url, path.display());
    git.clone_repo(&candidate.clone_url, path)?;

    let (commit_count, size_on_disk) = inspect(git, path)?;
    Ok(Outcome::Cloned {
        commit_count,
        size_on_disk,
    })
}

/// Commit count and on-disk size (KB) of a working copy.
fn inspect<G>(git: &G, path: &Path) -> Result<(u64, u64), GitError>
where
    G: GitBackend + ?Sized,
{
    let commit_count = git.commit_count(path)?;
    let size_on_disk = bytes_to_kb(dir_size(path));
    Ok((commit_count, size_on_disk))
}

fn remove_path(path: &Path) -> Result<(), GitError> {
    let removed = match path.symlink_metadata() {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(err) => Err(err),
    };
    removed.map_err(|err| {
        GitError::Failed(format!("Failed to remove {}: {}", path.display(), err))
    })
}
