//! JSON file-backed configuration store.
//!
//! Every mutation is a full read-modify-write of the configuration file and
//! returns the complete updated [`Config`], so callers can replace whatever
//! copy they hold. Mutations are serialized through an in-process write lock;
//! nothing guards against a second process editing the same file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::repository::{Repository, RepositoryUpdate};
use crate::settings::{
    CommitSettingsUpdate, GlobalLanguagesUpdate, IssuesSettingsUpdate, LanguageUpdate,
    PullRequestSettingsUpdate,
};
use crate::{Config, ConfigError, ConfigResult, RepositoryName};

/// Directory holding the configuration, relative to the home directory.
pub const CONFIG_DIR: &str = ".config/magic-slash";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILENAME: &str = "config.json";

/// Location of the configuration file for the current user.
///
/// Returns `None` when the home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Store for the Magic Slash configuration file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ConfigStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file does not need to exist; it is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store at `~/.config/magic-slash/config.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HomeDirectoryUnavailable` when the home directory
    /// cannot be determined.
    pub fn at_default_location() -> ConfigResult<Self> {
        default_config_path()
            .map(Self::new)
            .ok_or(ConfigError::HomeDirectoryUnavailable)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the configuration file.
    ///
    /// A missing, unreadable or malformed file yields [`Config::default`];
    /// the problem is logged but never returned. A file that parses as a JSON
    /// object is kept whole: values of an unexpected type stay in the `extra`
    /// maps instead of being dropped.
    pub fn read_config(&self) -> Config {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Configuration file not found, using defaults");
            return Config::default();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read configuration file");
                return Config::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse configuration file");
                Config::default()
            }
        }
    }

    /// Write the configuration file, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when the directory or file cannot be written.
    pub fn write_config(&self, config: &Config) -> ConfigResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::io(&self.path, e.into()))?;
        fs::write(&self.path, content).map_err(|e| ConfigError::io(&self.path, e))?;

        debug!(path = %self.path.display(), "Configuration written");
        Ok(())
    }

    /// Add a repository.
    ///
    /// An empty keyword list defaults to `[name]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyExists` when the name is taken; the
    /// existing entry is left untouched.
    pub fn add_repository(
        &self,
        name: &RepositoryName,
        path: &str,
        keywords: Vec<String>,
    ) -> ConfigResult<Config> {
        self.mutate(|config| {
            if config.contains_repository(name) {
                return Err(ConfigError::AlreadyExists {
                    name: name.to_string(),
                });
            }

            config.repositories.insert(
                name.to_string(),
                Repository::new(name.as_str(), path, keywords),
            );
            info!(repository = %name, path = %path, "Repository added");
            Ok(())
        })
    }

    /// Apply a partial update to a repository's general fields.
    pub fn update_repository(&self, name: &str, update: RepositoryUpdate) -> ConfigResult<Config> {
        self.mutate(|config| {
            update.apply_to(config.repository_mut(name)?);
            info!(repository = %name, "Repository updated");
            Ok(())
        })
    }

    pub fn update_repository_languages(
        &self,
        name: &str,
        update: &LanguageUpdate,
    ) -> ConfigResult<Config> {
        self.mutate(|config| {
            config
                .repository_mut(name)?
                .update_languages(|languages| update.apply_to(languages));
            debug!(repository = %name, "Repository languages updated");
            Ok(())
        })
    }

    pub fn update_repository_commit_settings(
        &self,
        name: &str,
        update: &CommitSettingsUpdate,
    ) -> ConfigResult<Config> {
        self.mutate(|config| {
            config
                .repository_mut(name)?
                .update_commit(|commit| update.apply_to(commit));
            debug!(repository = %name, "Repository commit settings updated");
            Ok(())
        })
    }

    pub fn update_repository_pull_request_settings(
        &self,
        name: &str,
        update: &PullRequestSettingsUpdate,
    ) -> ConfigResult<Config> {
        self.mutate(|config| {
            config
                .repository_mut(name)?
                .update_pull_request(|pull_request| update.apply_to(pull_request));
            debug!(repository = %name, "Repository pull request settings updated");
            Ok(())
        })
    }

    pub fn update_repository_issues_settings(
        &self,
        name: &str,
        update: &IssuesSettingsUpdate,
    ) -> ConfigResult<Config> {
        self.mutate(|config| {
            config
                .repository_mut(name)?
                .update_issues(|issues| update.apply_to(issues));
            debug!(repository = %name, "Repository issues settings updated");
            Ok(())
        })
    }

    /// Remove a repository, keeping the order of the remaining entries.
    pub fn delete_repository(&self, name: &str) -> ConfigResult<Config> {
        self.mutate(|config| {
            config
                .repositories
                .shift_remove(name)
                .ok_or_else(|| ConfigError::not_found(name))?;
            info!(repository = %name, "Repository deleted");
            Ok(())
        })
    }

    /// Update the global language defaults.
    pub fn update_languages(&self, update: &GlobalLanguagesUpdate) -> ConfigResult<Config> {
        self.mutate(|config| {
            config.update_languages(update);
            debug!("Global languages updated");
            Ok(())
        })
    }

    /// Run one read-modify-write cycle under the write lock.
    ///
    /// Nothing is written when `change` fails or the repository table could
    /// not be read.
    fn mutate<F>(&self, change: F) -> ConfigResult<Config>
    where
        F: FnOnce(&mut Config) -> ConfigResult<()>,
    {
        let _guard = self.lock();

        let mut config = self.read_config();
        if !config.repositories_readable() {
            return Err(ConfigError::UnreadableRepositories {
                path: self.path.clone(),
            });
        }
        change(&mut config)?;
        self.write_config(&config)?;

        Ok(config)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a panic in another writer leaves nothing inconsistent.
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
