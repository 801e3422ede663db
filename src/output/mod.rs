//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod dashboard;
pub mod formatters;
pub mod json;
pub mod progress;
pub mod table;

pub use dashboard::Dashboard;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}
