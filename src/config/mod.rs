//! Configuration management for GitGrab
//!
//! Settings are resolved from the environment once at start-up and passed
//! explicitly to the components that need them.

use std::path::{Path, PathBuf};

use crate::client::MAX_PAGE_SIZE;

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the listing ceiling
pub const MAX_REPOS_ENV: &str = "MAX_REPOS";

/// Ceiling used when `MAX_REPOS` is unset or invalid
pub const DEFAULT_MAX_REPOS: u32 = 25;

/// Default requested listing size (also shown in `--help`)
pub const DEFAULT_LIMIT: &str = "15";

/// Default user or organization to list
pub const DEFAULT_TARGET: &str = "ICJIA";

/// Name of the default destination folder under the project root
pub const REPOS_DIR_NAME: &str = "repos";

/// Runtime settings resolved once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of repositories ever requested from the API
    pub ceiling: u32,

    /// Root under which the default and renamed destination folders live
    pub project_root: PathBuf,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        let mut settings = Self::from_lookup(|key| std::env::var(key).ok());
        settings.project_root = install_root();
        settings
    }

    /// Resolve settings from an arbitrary key/value lookup.
    ///
    /// The project root defaults to the current directory; `from_env` replaces
    /// it with the executable's installation root.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            ceiling: parse_ceiling(lookup(MAX_REPOS_ENV).as_deref()),
            project_root: PathBuf::from("."),
        }
    }

    /// Override the project root.
    #[cfg(test)]
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Default destination directory (`<project root>/repos`)
    pub fn default_repos_dir(&self) -> PathBuf {
        self.project_root.join(REPOS_DIR_NAME)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_MAX_REPOS,
            project_root: PathBuf::from("."),
        }
    }
}

/// Parse the `MAX_REPOS` override, ignoring non-positive or non-numeric values.
///
/// The listing is a single request, so the ceiling never exceeds the API's
/// page size.
fn parse_ceiling(raw: Option<&str>) -> u32 {
    match raw.map(|value| value.trim().parse::<i64>()) {
        Some(Ok(value)) if value > i64::from(MAX_PAGE_SIZE) => {
            log::warn!(
                "{} of {} exceeds the GitHub page size, using {}",
                MAX_REPOS_ENV,
                value,
                MAX_PAGE_SIZE
            );
            MAX_PAGE_SIZE
        }
        Some(Ok(value)) if value > 0 => value as u32,
        Some(_) => {
            log::warn!(
                "Ignoring invalid {} value, using default of {}",
                MAX_REPOS_ENV,
                DEFAULT_MAX_REPOS
            );
            DEFAULT_MAX_REPOS
        }
        None => DEFAULT_MAX_REPOS,
    }
}

/// Installation root of the running executable.
///
/// For `<root>/bin/gitgrab` this is `<root>`. Falls back to the current
/// directory when the executable path cannot be determined.
fn install_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| installation_root_of(&exe))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn installation_root_of(exe: &Path) -> Option<PathBuf> {
    let bin_dir = exe.parent()?;
    Some(bin_dir.parent().unwrap_or(bin_dir).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.ceiling, 25);
        assert_eq!(settings.default_repos_dir(), PathBuf::from("./repos"));
    }

    #[test]
    fn test_ceiling_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings.ceiling, DEFAULT_MAX_REPOS);
    }

    #[test]
    fn test_ceiling_from_env() {
        let settings = Settings::from_lookup(lookup_from(&[("MAX_REPOS", "42")]));
        assert_eq!(settings.ceiling, 42);

        let settings = Settings::from_lookup(lookup_from(&[("MAX_REPOS", " 100 ")]));
        assert_eq!(settings.ceiling, 100);
    }

    #[test]
    fn test_ceiling_capped_at_page_size() {
        for raw in ["101", "200", "99999999999"] {
            let settings = Settings::from_lookup(lookup_from(&[("MAX_REPOS", raw)]));
            assert_eq!(settings.ceiling, MAX_PAGE_SIZE, "raw value {:?}", raw);
        }
    }

    #[test]
    fn test_ceiling_ignores_invalid_values() {
        for raw in ["invalid", "-10", "0", ""] {
            let settings = Settings::from_lookup(lookup_from(&[("MAX_REPOS", raw)]));
            assert_eq!(settings.ceiling, DEFAULT_MAX_REPOS, "raw value {:?}", raw);
        }
    }

    #[test]
    fn test_with_project_root() {
        let settings = Settings::default().with_project_root("/opt/gitgrab");
        assert_eq!(
            settings.default_repos_dir(),
            PathBuf::from("/opt/gitgrab/repos")
        );
    }

    #[test]
    fn test_installation_root_of_binary() {
        let root = installation_root_of(Path::new("/usr/local/bin/gitgrab"));
        assert_eq!(root, Some(PathBuf::from("/usr/local")));
    }

    #[test]
    fn test_installation_root_of_top_level_binary() {
        let root = installation_root_of(Path::new("/gitgrab"));
        assert_eq!(root, Some(PathBuf::from("/")));
    }
}
