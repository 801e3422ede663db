//! The list → select → resolve → clone → report pipeline

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use super::Cli;
use super::select::select_repositories;
use crate::client::{GitHubApi, GitHubClient, list_repositories};
use crate::config::{DEFAULT_TARGET, Settings};
use crate::error::{InputError, Result};
use crate::git::{GitBackend, GitCli, acquire};
use crate::models::AcquisitionResult;
use crate::output::{self, Dashboard, progress::Spinner};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::validate::{Limit, is_valid_token, parse_limit, validate_limit};
use crate::workspace::resolve_directory;

/// How a pipeline run ended without a fatal error
#[derive(Debug)]
pub enum Finished {
    /// The target has no repositories
    NothingFound,
    /// The operator deselected everything
    NothingSelected,
    /// One result per selected repository
    Acquired(Vec<AcquisitionResult>),
}

/// Validated inputs of one pipeline run
#[derive(Debug, Clone)]
pub struct GrabRequest<'a> {
    pub target: &'a str,
    pub limit: Limit,
    pub directory: PathBuf,
    pub project_root: &'a Path,
}

/// Run `gitgrab` for the parsed command line.
pub async fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    print_banner();

    let token = require_token(cli.token.as_deref())?;
    let limit = resolve_limit(&cli.limit, settings.ceiling)?;
    let directory = cli
        .directory
        .clone()
        .unwrap_or_else(|| settings.default_repos_dir());

    print_target(&cli.target, &directory);

    let client = GitHubClient::with_host(token.to_string(), cli.api_host.clone())?;
    let request = GrabRequest {
        target: &cli.target,
        limit,
        directory,
        project_root: &settings.project_root,
    };

    match grab(&client, &TerminalPrompter::new(), &GitCli::new(), &request).await? {
        Finished::NothingFound => {
            eprintln!("{}", "No repositories found.".yellow());
            Ok(())
        }
        Finished::NothingSelected => {
            eprintln!("{}", "No repositories selected. Exiting.".yellow());
            Ok(())
        }
        Finished::Acquired(results) => output::print(&Dashboard::new(&results), cli.format),
    }
}

/// List, select, resolve the destination and acquire.
///
/// Listing and directory failures are fatal; per-repository clone failures
/// end up in the returned results.
pub async fn grab<A, P, G>(
    api: &A,
    prompter: &P,
    git: &G,
    request: &GrabRequest<'_>,
) -> Result<Finished>
where
    A: GitHubApi + ?Sized,
    P: Prompter + ?Sized,
    G: GitBackend + ?Sized,
{
    let spinner = Spinner::start(format!(
        "Fetching up to {} recent repositories...",
        request.limit
    ));
    let candidates = match list_repositories(api, request.target, request.limit).await {
        Ok(candidates) => {
            spinner.succeed(format!(
                "Found {} recent repositories for {}",
                candidates.len(),
                request.target
            ));
            candidates
        }
        Err(err) => {
            spinner.fail(format!("Could not list repositories for {}", request.target));
            return Err(err);
        }
    };

    if candidates.is_empty() {
        return Ok(Finished::NothingFound);
    }

    // Prompts, git subprocesses and directory walks all block
    tokio::task::block_in_place(|| -> Result<Finished> {
        let selected = select_repositories(prompter, candidates)?;
        if selected.is_empty() {
            return Ok(Finished::NothingSelected);
        }
        debug!("{} repositories selected", selected.len());

        let root = resolve_directory(prompter, &request.directory, request.project_root)?;

        Ok(Finished::Acquired(acquire(git, &selected, &root)))
    })
}

/// Require a token that at least looks like a GitHub token.
fn require_token(token: Option<&str>) -> Result<&str> {
    let token = token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(InputError::MissingToken)?;

    if !is_valid_token(token) {
        return Err(InputError::InvalidToken.into());
    }
    Ok(token)
}

/// Parse the requested limit and clamp it to the ceiling, warning when clamped.
fn resolve_limit(raw: &str, ceiling: u32) -> Result<Limit> {
    let limit = validate_limit(raw, ceiling)?;

    if parse_limit(raw)? > u64::from(limit.get()) {
        eprintln!(
            "{}",
            format!(
                "Limiting to maximum of {} repositories (you requested {})",
                limit,
                raw.trim()
            )
            .yellow()
        );
    }
    Ok(limit)
}

fn print_banner() {
    eprintln!(
        "{}",
        "\n=== GitGrab - GitHub Repository Cloning Tool ===".bold().green()
    );
    eprintln!(
        "{}",
        "A CLI utility to easily browse and clone GitHub repositories".cyan()
    );
    eprintln!(
        "{}",
        "Run with `gitgrab [username/organization]` to get started\n".cyan()
    );
}

fn print_target(target: &str, directory: &Path) {
    let shown = if target == DEFAULT_TARGET {
        format!("{} (default)", target).yellow().to_string()
    } else {
        target.to_string()
    };
    eprintln!("{} {}", "Target:".blue(), shown);
    eprintln!("{}", "To specify a different user or organization, run:".blue());
    eprintln!("{}", "  gitgrab <username/organization>".cyan());
    eprintln!(
        "{} {}\n",
        "Repositories will be saved to:".blue(),
        directory.display().to_string().cyan()
    );
}
