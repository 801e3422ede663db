//! CLI definition and command handlers

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_LIMIT, DEFAULT_TARGET, TOKEN_ENV};

pub mod args;
pub mod grab;
pub mod select;

pub use args::OutputFormat;

/// GitGrab - list, select, and clone GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "gitgrab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub username or organization name
    #[arg(default_value = DEFAULT_TARGET)]
    pub target: String,

    /// GitHub personal access token
    #[arg(short, long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Directory to clone repositories to [default: <install root>/repos]
    #[arg(short, long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Number of recent repositories to list (capped by MAX_REPOS)
    #[arg(
        short,
        long,
        value_name = "NUMBER",
        default_value = DEFAULT_LIMIT,
        allow_hyphen_values = true
    )]
    pub limit: String,

    /// Output format for the final report (pretty, json)
    #[arg(
        long,
        env = "GITGRAB_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, env = "GITGRAB_DEBUG", hide_env = true)]
    pub debug: bool,

    /// GitHub API base URL
    #[arg(long, env = "GITGRAB_API_HOST", hide = true)]
    pub api_host: Option<String>,
}
