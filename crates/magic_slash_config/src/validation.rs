//! Input validation for repository entries.
//!
//! Pure functions checking what a user typed before it reaches the store:
//! repository names, filesystem paths and keyword lists. Path checks touch
//! the filesystem (existence, directory, `.git`) but never modify it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ConfigError, ConfigResult, RepositoryName};

/// Validate a repository name as received from a client.
///
/// `None` means the field was missing altogether.
///
/// # Examples
///
/// ```rust
/// use magic_slash_config::validation::validate_repo_name;
///
/// assert!(validate_repo_name(Some("ab")).is_ok());
/// assert!(validate_repo_name(Some("a b")).is_err());
/// assert!(validate_repo_name(None).is_err());
/// ```
pub fn validate_repo_name(name: Option<&str>) -> ConfigResult<RepositoryName> {
    match name {
        None => Err(ConfigError::validation("Name is required")),
        Some(name) => RepositoryName::try_new(name),
    }
}

/// Expand a leading `~` to the current user's home directory.
///
/// Any other input, or a `~` when the home directory cannot be determined,
/// is returned unchanged.
pub fn expand_path(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            let rest = rest.trim_start_matches(['/', '\\']);
            return if rest.is_empty() { home } else { home.join(rest) };
        }
    }

    PathBuf::from(input)
}

/// Non-fatal findings about a repository path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathWarning {
    /// Nothing exists at the path yet; the repository may be cloned later.
    DirectoryMissing,

    /// The directory exists but has no `.git` entry.
    NotGitRepository,
}

impl PathWarning {
    pub fn message(self) -> &'static str {
        match self {
            PathWarning::DirectoryMissing => "Directory does not exist",
            PathWarning::NotGitRepository => "Not a git repository",
        }
    }
}

impl fmt::Display for PathWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a successful path validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathValidation {
    pub expanded_path: PathBuf,
    pub warning: Option<PathWarning>,
}

impl PathValidation {
    /// The expanded path as stored in the configuration file.
    pub fn expanded_path_string(&self) -> String {
        self.expanded_path.to_string_lossy().into_owned()
    }
}

/// Validate a repository path for add and update operations.
///
/// # Errors
///
/// Returns `ConfigError::Validation` when the path is empty or points at
/// something other than a directory. A missing directory or a directory that
/// is not a git repository is accepted with a [`PathWarning`].
pub fn validate_repo_path(raw: &str) -> ConfigResult<PathValidation> {
    if raw.is_empty() {
        return Err(ConfigError::validation("Path is required"));
    }

    let expanded_path = expand_path(raw.trim());
    if expanded_path.as_os_str().is_empty() {
        return Err(ConfigError::validation("Path cannot be empty"));
    }

    let Ok(metadata) = fs::metadata(&expanded_path) else {
        return Ok(PathValidation {
            expanded_path,
            warning: Some(PathWarning::DirectoryMissing),
        });
    };

    if !metadata.is_dir() {
        return Err(ConfigError::validation("Path is not a directory"));
    }

    let warning = (!has_git_dir(&expanded_path)).then_some(PathWarning::NotGitRepository);

    Ok(PathValidation {
        expanded_path,
        warning,
    })
}

/// Lightweight git check used for live feedback while a path is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStatus {
    pub is_git: bool,
    pub exists: bool,
    /// Only reported when the path exists
    pub expanded_path: Option<PathBuf>,
}

/// Report whether a path exists and contains a `.git` entry.
pub fn is_git_repository(raw: &str) -> GitStatus {
    let expanded_path = expand_path(raw);

    if !expanded_path.exists() {
        return GitStatus {
            is_git: false,
            exists: false,
            expanded_path: None,
        };
    }

    GitStatus {
        is_git: has_git_dir(&expanded_path),
        exists: true,
        expanded_path: Some(expanded_path),
    }
}

/// Split a comma-separated keyword list, trimming and dropping blanks.
///
/// # Examples
///
/// ```rust
/// use magic_slash_config::validation::parse_keywords;
///
/// assert_eq!(parse_keywords(" api, backend ,,"), vec!["api", "backend"]);
/// ```
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_git_dir(path: &Path) -> bool {
    path.join(".git").exists()
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
