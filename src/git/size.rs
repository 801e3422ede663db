//! On-disk size of a working copy

use std::path::Path;

use walkdir::WalkDir;

use super::WORKING_COPY_MARKER;

/// Total size in bytes of the regular files under `path`.
///
/// Working-copy metadata directories are skipped at every depth. Entries that
/// cannot be read count as zero instead of failing the whole walk.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_entry(|entry| {
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && entry.file_name() == WORKING_COPY_MARKER)
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.metadata().map(|m| m.len()).unwrap_or(0))
        .sum()
}

/// Convert bytes to kilobytes, rounding half up.
pub fn bytes_to_kb(bytes: u64) -> u64 {
    bytes.saturating_add(512) / 1024
}
