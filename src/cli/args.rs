//! Shared CLI argument types

/// Output format for the final report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - summary, table and per-status lists
    #[default]
    Pretty,
    /// JSON format - structured for scripts
    Json,
}
