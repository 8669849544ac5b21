//! Repository entries.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::raw::{self, RawObject};
use crate::settings::{
    update_section, CommitSettings, IssuesSettings, LanguageOverrides, LanguageUpdate,
    PullRequestSettings, SettingsSection,
};

const PATH: &str = "path";
const KEYWORDS: &str = "keywords";
const LANGUAGES: &str = "languages";
const COMMIT: &str = "commit";
const PULL_REQUEST: &str = "pullRequest";
const ISSUES: &str = "issues";

/// One configured repository.
///
/// # Example
///
/// ```json
/// {
///   "path": "/home/me/code/api",
///   "keywords": ["api", "backend"],
///   "languages": { "commit": "fr" },
///   "commit": { "format": "gitmoji" },
///   "pullRequest": { "autoLinkTickets": false }
/// }
/// ```
///
/// Sections without overrides are left out when written. A value that cannot
/// be read (say, `"keywords": "api"`) is kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct Repository {
    /// Local path to the working copy, with `~` already expanded
    pub path: String,

    /// Keywords used to auto-detect the repository from a ticket or prompt
    pub keywords: Vec<String>,

    pub languages: Option<LanguageOverrides>,
    pub commit: Option<CommitSettings>,
    pub pull_request: Option<PullRequestSettings>,
    pub issues: Option<IssuesSettings>,

    /// Keys written by other tooling, preserved verbatim
    pub extra: RawObject,
}

impl From<RawObject> for Repository {
    fn from(mut raw: RawObject) -> Self {
        Self {
            path: raw::take(&mut raw, PATH).unwrap_or_default(),
            keywords: raw::take(&mut raw, KEYWORDS).unwrap_or_default(),
            languages: take_section(&mut raw, LANGUAGES),
            commit: take_section(&mut raw, COMMIT),
            pull_request: take_section(&mut raw, PULL_REQUEST),
            issues: take_section(&mut raw, ISSUES),
            extra: raw,
        }
    }
}

impl From<Repository> for RawObject {
    fn from(repository: Repository) -> Self {
        let mut raw = RawObject::new();
        raw.insert(PATH.to_string(), repository.path.into());
        raw.insert(KEYWORDS.to_string(), repository.keywords.into());
        put_section(&mut raw, LANGUAGES, repository.languages);
        put_section(&mut raw, COMMIT, repository.commit);
        put_section(&mut raw, PULL_REQUEST, repository.pull_request);
        put_section(&mut raw, ISSUES, repository.issues);
        raw::overlay(raw, repository.extra)
    }
}

fn take_section<S>(raw: &mut RawObject, key: &str) -> Option<S>
where
    S: SettingsSection + DeserializeOwned,
{
    raw::take::<S>(raw, key).filter(|section| !section.is_empty())
}

fn put_section<S>(raw: &mut RawObject, key: &str, section: Option<S>)
where
    S: SettingsSection + Into<RawObject>,
{
    if let Some(section) = section.filter(|section| !section.is_empty()) {
        raw.insert(key.to_string(), raw::object(section.into()));
    }
}

impl Repository {
    /// Create an entry with no overrides.
    ///
    /// An empty keyword list defaults to the repository name itself.
    pub fn new(name: &str, path: impl Into<String>, keywords: Vec<String>) -> Self {
        let keywords = if keywords.is_empty() {
            vec![name.to_string()]
        } else {
            keywords
        };

        Self {
            path: path.into(),
            keywords,
            ..Self::default()
        }
    }

    /// Total number of explicit overrides across all sections.
    pub fn custom_setting_count(&self) -> usize {
        self.languages.as_ref().map_or(0, SettingsSection::override_count)
            + self.commit.as_ref().map_or(0, SettingsSection::override_count)
            + self
                .pull_request
                .as_ref()
                .map_or(0, SettingsSection::override_count)
            + self.issues.as_ref().map_or(0, SettingsSection::override_count)
    }

    // Editing a section replaces an unreadable value stored under its key.

    pub fn update_languages(&mut self, mutate: impl FnOnce(&mut LanguageOverrides)) {
        self.extra.shift_remove(LANGUAGES);
        update_section(&mut self.languages, mutate);
    }

    pub fn update_commit(&mut self, mutate: impl FnOnce(&mut CommitSettings)) {
        self.extra.shift_remove(COMMIT);
        update_section(&mut self.commit, mutate);
    }

    pub fn update_pull_request(&mut self, mutate: impl FnOnce(&mut PullRequestSettings)) {
        self.extra.shift_remove(PULL_REQUEST);
        update_section(&mut self.pull_request, mutate);
    }

    pub fn update_issues(&mut self, mutate: impl FnOnce(&mut IssuesSettings)) {
        self.extra.shift_remove(ISSUES);
        update_section(&mut self.issues, mutate);
    }
}

/// Partial update of a repository's general fields.
///
/// Only fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryUpdate {
    pub path: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Replaces the whole language override section when present
    pub languages: Option<LanguageUpdate>,
}

impl RepositoryUpdate {
    pub fn apply_to(self, repository: &mut Repository) {
        if let Some(path) = self.path {
            repository.extra.shift_remove(PATH);
            repository.path = path;
        }
        if let Some(keywords) = self.keywords {
            repository.extra.shift_remove(KEYWORDS);
            repository.keywords = keywords;
        }
        if let Some(languages) = self.languages {
            repository.extra.shift_remove(LANGUAGES);
            let overrides = languages.into_overrides();
            repository.languages = (!overrides.is_empty()).then_some(overrides);
        }
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
