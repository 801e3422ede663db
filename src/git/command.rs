//! Git backend that shells out to the `git` executable

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use super::GitBackend;
use crate::error::GitError;

/// Runs the `git` command line tool
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        // Fail instead of blocking on a credential prompt behind the spinner.
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitBackend for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), GitError> {
        debug!("git clone {} {}", url, dest.display());
        let output = self
            .command()
            .arg("clone")
            .arg("--quiet")
            .arg(url)
            .arg(dest)
            .output()?;

        check_status("clone", &output)
    }

    fn commit_count(&self, repo: &Path) -> Result<u64, GitError> {
        let output = self
            .command()
            .arg("-C")
            .arg(repo)
            .args(["rev-list", "--count", "HEAD"])
            .output()?;

        check_status("rev-list", &output)?;
        parse_count(&String::from_utf8_lossy(&output.stdout))
    }
}

fn check_status(subcommand: &str, output: &Output) -> Result<(), GitError> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        Err(GitError::Failed(format!(
            "git {} exited with {}",
            subcommand, output.status
        )))
    } else {
        Err(GitError::Failed(stderr.to_string()))
    }
}

fn parse_count(stdout: &str) -> Result<u64, GitError> {
    let trimmed = stdout.trim();
    trimmed
        .parse()
        .map_err(|_| GitError::InvalidCount(trimmed.to_string()))
}
