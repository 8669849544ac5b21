//! Repository name validation.
//!
//! Provides a branded type for the names used as keys in the `repositories`
//! map, so only validated names can be inserted by the store.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Maximum number of characters in a repository name.
pub const MAX_NAME_LENGTH: usize = 50;

/// A validated repository name.
///
/// Repository names must:
/// - Be 1-50 characters long once surrounding whitespace is trimmed
/// - Contain only ASCII letters, digits, hyphens and underscores
///
/// # Examples
///
/// ```
/// use magic_slash_config::RepositoryName;
///
/// assert!(RepositoryName::try_new("my-api").is_ok());
/// assert!(RepositoryName::try_new("My_Api_2").is_ok());
///
/// assert!(RepositoryName::try_new("").is_err());
/// assert!(RepositoryName::try_new("a b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Create a new RepositoryName, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if:
    /// - The trimmed name is empty
    /// - The trimmed name is longer than 50 characters
    /// - The name contains anything other than letters, digits, `-` and `_`
    pub fn try_new(name: impl Into<String>) -> ConfigResult<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ConfigError::validation("Name cannot be empty"));
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ConfigError::validation(format!(
                "Name must be {} characters or less",
                MAX_NAME_LENGTH
            )));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::validation(
                "Name can only contain letters, numbers, hyphens and underscores",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RepositoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for RepositoryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for RepositoryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<RepositoryName> for String {
    fn from(name: RepositoryName) -> String {
        name.0
    }
}

#[cfg(test)]
#[path = "repository_name_tests.rs"]
mod tests;
