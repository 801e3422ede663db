//! Destination directory preparation
//!
//! Makes sure the clone destination exists and is safe to use, asking the
//! operator what to do when it already has content.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use crate::error::{Error, InputError, Result};
use crate::prompt::Prompter;

/// Resolve the directory repositories will be cloned into.
///
/// - a missing `initial` is created and returned;
/// - an empty `initial` is returned unchanged;
/// - a non-empty `initial` is either emptied (operator confirms) or replaced by
///   a new folder under `project_root` whose name the operator types in.
///
/// Filesystem errors are fatal. Naming a folder that already exists fails with
/// [`InputError::DirectoryExists`].
pub fn resolve_directory<P>(prompter: &P, initial: &Path, project_root: &Path) -> Result<PathBuf>
where
    P: Prompter + ?Sized,
{
    let metadata = match fs::metadata(initial) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            eprintln!(
                "{}",
                format!("Creating repository directory: {}", initial.display()).blue()
            );
            create_dir(initial)?;
            return Ok(initial.to_path_buf());
        }
        Err(err) => return Err(Error::filesystem(initial, err)),
    };

    if !metadata.is_dir() {
        return Err(Error::filesystem(
            initial,
            io::Error::other("path exists but is not a directory"),
        ));
    }

    if is_empty_dir(initial)? {
        eprintln!(
            "{}",
            format!("Using empty repository directory: {}", initial.display()).blue()
        );
        return Ok(initial.to_path_buf());
    }

    let clear = prompter.confirm(
        &format!(
            "The directory {} is not empty. Do you want to delete its contents?",
            initial.display()
        ),
        true,
    )?;

    if clear {
        clear_dir(initial)?;
        eprintln!(
            "{} Repository directory cleaned: {}",
            "✓".green(),
            initial.display()
        );
        return Ok(initial.to_path_buf());
    }

    let name = prompter.input(
        "Enter a new folder name to create at the project root:",
        validate_folder_name,
    )?;
    let new_dir = project_root.join(name.trim());

    if new_dir.symlink_metadata().is_ok() {
        return Err(InputError::DirectoryExists(new_dir).into());
    }

    eprintln!(
        "{}",
        format!("Creating new repository directory: {}", new_dir.display()).blue()
    );
    create_dir(&new_dir)?;
    Ok(new_dir)
}

/// Check a folder name typed by the operator.
pub fn validate_folder_name(input: &str) -> std::result::Result<(), String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("Folder name cannot be empty".to_string());
    }
    if name.contains('/') || name.contains('\\') {
        return Err("Folder name should not contain path separators".to_string());
    }
    if name == "." || name == ".." {
        return Err("Folder name cannot be '.' or '..'".to_string());
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| Error::filesystem(path, err))
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).map_err(|err| Error::filesystem(path, err))?;
    Ok(entries.next().is_none())
}

/// Delete everything inside `path`, keeping `path` itself.
fn clear_dir(path: &Path) -> Result<()> {
    debug!("Clearing {}", path.display());
    let entries = fs::read_dir(path).map_err(|err| Error::filesystem(path, err))?;

    for entry in entries {
        let entry = entry.map_err(|err| Error::filesystem(path, err))?;
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| Error::filesystem(&entry_path, err))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&entry_path)
        } else {
            fs::remove_file(&entry_path)
        };
        removed.map_err(|err| Error::filesystem(&entry_path, err))?;
    }

    Ok(())
}
