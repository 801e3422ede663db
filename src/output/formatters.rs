//! Reusable formatting utilities for CLI output

/// Format a size given in kilobytes as KB, MB or GB.
///
/// # Example output
/// - `512 KB`
/// - `1.50 MB`
/// - `2.00 GB`
pub fn format_size(size_kb: u64) -> String {
    const KB_PER_MB: u64 = 1024;
    const KB_PER_GB: u64 = 1024 * 1024;

    if size_kb < KB_PER_MB {
        format!("{} KB", size_kb)
    } else if size_kb < KB_PER_GB {
        format!("{:.2} MB", size_kb as f64 / KB_PER_MB as f64)
    } else {
        format!("{:.2} GB", size_kb as f64 / KB_PER_GB as f64)
    }
}

/// Truncate `text` to at most `width` characters, ending with `...` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
