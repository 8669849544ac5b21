//! Configuration management for Magic Slash
//!
//! Reads and writes the per-user configuration file
//! (`~/.config/magic-slash/config.json`) that lists local repositories,
//! their detection keywords and their setting overrides. Also provides the
//! input validation and pull request template helpers used by the local
//! configuration web UI.
//!
//! # Example
//!
//! ```rust,no_run
//! use magic_slash_config::{ConfigStore, RepositoryName};
//!
//! let store = ConfigStore::at_default_location()?;
//! let name = RepositoryName::try_new("api")?;
//! let config = store.add_repository(&name, "/home/me/code/api", Vec::new())?;
//! assert_eq!(config.repositories["api"].keywords, vec!["api"]);
//! # Ok::<(), magic_slash_config::ConfigError>(())
//! ```

pub mod config;
pub mod effective;
pub mod errors;
pub mod pr_template;
pub mod raw;
pub mod repository;
pub mod repository_name;
pub mod setting;
pub mod settings;
pub mod store;
pub mod validation;

pub use config::Config;
pub use effective::EffectiveSettings;
pub use errors::{ConfigError, ConfigResult};
pub use pr_template::PrTemplate;
pub use raw::RawObject;
pub use repository::{Repository, RepositoryUpdate};
pub use repository_name::RepositoryName;
pub use setting::Setting;
pub use settings::{
    CommitFormat, CommitSettings, CommitSettingsUpdate, CommitStyle, GlobalLanguages,
    GlobalLanguagesUpdate, IssuesSettings, IssuesSettingsUpdate, Language, LanguageOverrides,
    LanguageUpdate, PullRequestSettings, PullRequestSettingsUpdate, ResolvedLanguages,
};
pub use store::ConfigStore;
pub use validation::{GitStatus, PathValidation, PathWarning};
