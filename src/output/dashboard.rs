//! Final report of an acquisition run
//!
//! The pretty form is a summary block, a table with one row per repository
//! and per-status listings. The JSON form carries the same data for scripts.

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::Formattable;
use super::formatters::{format_size, truncate};
use super::json::format_json;
use super::table::format_table;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{AcquisitionResult, AcquisitionStatus};

const NAME_WIDTH: usize = 28;
const LANGUAGE_WIDTH: usize = 13;
const LOCATION_WIDTH: usize = 48;

/// Per-status counts over a set of results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub cloned: usize,
    pub existing: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_results(results: &[AcquisitionResult]) -> Self {
        results.iter().fold(
            Summary {
                total: results.len(),
                ..Summary::default()
            },
            |mut summary, result| {
                match result.status() {
                    AcquisitionStatus::Cloned => summary.cloned += 1,
                    AcquisitionStatus::Existing => summary.existing += 1,
                    AcquisitionStatus::Failed => summary.failed += 1,
                }
                summary
            },
        )
    }
}

/// One table row of the dashboard
#[derive(Debug, Clone, Tabled)]
pub struct ResultRow {
    #[tabled(rename = "REPOSITORY")]
    pub repository: String,

    #[tabled(rename = "LANGUAGE")]
    pub language: String,

    /// Size on disk when known, otherwise the size GitHub reports
    #[tabled(rename = "SIZE")]
    pub size: String,

    #[tabled(rename = "STARS")]
    pub stars: String,

    #[tabled(rename = "COMMITS")]
    pub commits: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,
}

impl From<&AcquisitionResult> for ResultRow {
    fn from(result: &AcquisitionResult) -> Self {
        let size_kb = result.size_on_disk().unwrap_or(result.repo.size);
        let commits = result
            .commit_count()
            .map(|count| count.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        Self {
            repository: truncate(&result.repo.name, NAME_WIDTH),
            language: truncate(&result.repo.language, LANGUAGE_WIDTH),
            size: format_size(size_kb),
            stars: result.repo.stars.to_string(),
            commits,
            status: result.status().to_string(),
            location: truncate(&result.path.display().to_string(), LOCATION_WIDTH),
        }
    }
}

/// Render the human-readable dashboard.
pub fn render_dashboard(results: &[AcquisitionResult]) -> String {
    let summary = Summary::from_results(results);
    let mut lines = vec![
        String::new(),
        "📊 GitHub Repositories Dashboard 📊".bold().blue().to_string(),
        String::new(),
        format!("Total repositories: {}", summary.total),
        format!("{} {}", "Cloned:".green(), summary.cloned),
        format!("{} {}", "Already existing:".yellow(), summary.existing),
        format!("{} {}", "Failed:".red(), summary.failed),
        String::new(),
    ];

    let rows: Vec<ResultRow> = results.iter().map(ResultRow::from).collect();
    lines.push(format_table(&rows));

    let with_status = |status: AcquisitionStatus| {
        results
            .iter()
            .filter(move |result| result.status() == status)
    };

    if summary.failed > 0 {
        lines.push(String::new());
        lines.push("✖ Failed Repositories:".red().bold().to_string());
        for result in with_status(AcquisitionStatus::Failed) {
            lines.push(format!(
                "  {}: {}",
                result.repo.name,
                result.error().unwrap_or_default()
            ));
        }
    }

    if summary.cloned > 0 {
        lines.push(String::new());
        lines.push("✔ Successfully Cloned Repositories:".green().bold().to_string());
        for result in with_status(AcquisitionStatus::Cloned) {
            lines.push(format!("  {} → {}", result.repo.name, result.path.display()));
        }
    }

    if summary.existing > 0 {
        lines.push(String::new());
        lines.push("⚠ Already Existing Repositories:".yellow().bold().to_string());
        for result in with_status(AcquisitionStatus::Existing) {
            lines.push(format!("  {} → {}", result.repo.name, result.path.display()));
        }
    }

    lines.join("\n")
}

/// Outcome report for `gitgrab`, printable as pretty text or JSON
pub struct Dashboard<'a> {
    results: &'a [AcquisitionResult],
}

impl<'a> Dashboard<'a> {
    pub fn new(results: &'a [AcquisitionResult]) -> Self {
        Self { results }
    }
}

#[derive(Serialize)]
struct DashboardJson<'a> {
    summary: Summary,
    results: &'a [AcquisitionResult],
}

impl Formattable for Dashboard<'_> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(render_dashboard(self.results)),
            OutputFormat::Json => Ok(format_json(&DashboardJson {
                summary: Summary::from_results(self.results),
                results: self.results,
            })?),
        }
    }
}
