//! The configuration document.
//!
//! Mirrors `~/.config/magic-slash/config.json`:
//!
//! ```json
//! {
//!   "version": "1.4.0",
//!   "repositories": {
//!     "api": { "path": "/home/me/code/api", "keywords": ["api"] }
//!   },
//!   "languages": { "commit": "en", "pullRequest": "fr" }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::raw::{self, RawObject};
use crate::repository::Repository;
use crate::settings::{GlobalLanguages, GlobalLanguagesUpdate};
use crate::{ConfigError, ConfigResult};

/// Version reported when the file does not carry one.
pub const UNKNOWN_VERSION: &str = "unknown";

const VERSION: &str = "version";
const REPOSITORIES: &str = "repositories";
const LANGUAGES: &str = "languages";

fn unknown_version() -> String {
    UNKNOWN_VERSION.to_string()
}

/// Root of the configuration file.
///
/// Values that cannot be read are kept in `extra` and written back as found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct Config {
    /// Version of the Magic Slash installation that wrote the file
    pub version: String,

    /// Repositories keyed by name, in insertion order
    pub repositories: IndexMap<String, Repository>,

    /// Global language defaults
    pub languages: GlobalLanguages,

    /// Keys written by other tooling, preserved verbatim
    pub extra: RawObject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: unknown_version(),
            repositories: IndexMap::new(),
            languages: GlobalLanguages::default(),
            extra: RawObject::new(),
        }
    }
}

impl From<RawObject> for Config {
    fn from(mut raw: RawObject) -> Self {
        Self {
            version: raw::take(&mut raw, VERSION).unwrap_or_else(unknown_version),
            repositories: raw::take(&mut raw, REPOSITORIES).unwrap_or_default(),
            languages: raw::take(&mut raw, LANGUAGES).unwrap_or_default(),
            extra: raw,
        }
    }
}

impl From<Config> for RawObject {
    fn from(config: Config) -> Self {
        let repositories = config
            .repositories
            .into_iter()
            .map(|(name, repository)| (name, raw::object(repository.into())))
            .collect();

        let mut raw = RawObject::new();
        raw.insert(VERSION.to_string(), config.version.into());
        raw.insert(REPOSITORIES.to_string(), Value::Object(repositories));
        raw.insert(LANGUAGES.to_string(), raw::object(config.languages.into()));
        raw::overlay(raw, config.extra)
    }
}

impl Config {
    pub fn repository(&self, name: &str) -> Option<&Repository> {
        self.repositories.get(name)
    }

    /// Look up a repository for mutation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` when no repository has this name.
    pub fn repository_mut(&mut self, name: &str) -> ConfigResult<&mut Repository> {
        self.repositories
            .get_mut(name)
            .ok_or_else(|| ConfigError::not_found(name))
    }

    pub fn contains_repository(&self, name: &str) -> bool {
        self.repositories.contains_key(name)
    }

    /// Check whether the repository table was read.
    ///
    /// A table that is not an object of objects is kept verbatim in `extra`;
    /// it is written back untouched but cannot be edited.
    pub fn repositories_readable(&self) -> bool {
        !self.extra.contains_key(REPOSITORIES)
    }

    /// Apply an update to the global language defaults.
    ///
    /// An unreadable `languages` value is replaced.
    pub fn update_languages(&mut self, update: &GlobalLanguagesUpdate) {
        self.extra.shift_remove(LANGUAGES);
        update.apply_to(&mut self.languages);
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
