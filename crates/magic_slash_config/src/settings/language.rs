//! Output language settings.
//!
//! Four pieces of generated text can be written in English or French: commit
//! messages, pull request descriptions, Jira comments and the assistant's
//! discussion language. Global defaults live at the configuration root; each
//! repository may override any of them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::raw::{self, RawObject};
use crate::setting::{deserialize_lenient, deserialize_update, Setting};
use crate::settings::SettingsSection;

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// The two-letter code used in the configuration file.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Parse a two-letter language code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magic_slash_config::Language;
    ///
    /// assert_eq!(Language::from_code("fr"), Some(Language::Fr));
    /// assert_eq!(Language::from_code("de"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// Human-readable name of the language, in that language.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
        }
    }
}

impl From<Language> for Value {
    fn from(language: Language) -> Self {
        Value::from(language.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// Keys shared by the global defaults and the per-repository overrides.
const COMMIT: &str = "commit";
const PULL_REQUEST: &str = "pullRequest";
const JIRA_COMMENT: &str = "jiraComment";
const DISCUSSION: &str = "discussion";

/// Global language defaults stored at the configuration root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct GlobalLanguages {
    pub commit: Option<Language>,
    pub pull_request: Option<Language>,
    pub jira_comment: Option<Language>,
    pub discussion: Option<Language>,

    /// Unrecognized keys and codes, kept verbatim
    pub extra: RawObject,
}

impl From<RawObject> for GlobalLanguages {
    fn from(mut raw: RawObject) -> Self {
        Self {
            commit: raw::take(&mut raw, COMMIT),
            pull_request: raw::take(&mut raw, PULL_REQUEST),
            jira_comment: raw::take(&mut raw, JIRA_COMMENT),
            discussion: raw::take(&mut raw, DISCUSSION),
            extra: raw,
        }
    }
}

impl From<GlobalLanguages> for RawObject {
    fn from(languages: GlobalLanguages) -> Self {
        let mut raw = RawObject::new();
        for (key, language) in [
            (COMMIT, languages.commit),
            (PULL_REQUEST, languages.pull_request),
            (JIRA_COMMENT, languages.jira_comment),
            (DISCUSSION, languages.discussion),
        ] {
            if let Some(language) = language {
                raw.insert(key.to_string(), language.into());
            }
        }
        raw::overlay(raw, languages.extra)
    }
}

/// Update to the global language defaults.
///
/// Only real languages are accepted here: the global level *is* the default,
/// so there is nothing to inherit from. Unknown codes, `null` and
/// `"default"` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalLanguagesUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub commit: Option<Language>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub pull_request: Option<Language>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub jira_comment: Option<Language>,

    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub discussion: Option<Language>,
}

impl GlobalLanguagesUpdate {
    pub fn apply_to(&self, languages: &mut GlobalLanguages) {
        let extra = &mut languages.extra;
        for (slot, key, update) in [
            (&mut languages.commit, COMMIT, self.commit),
            (&mut languages.pull_request, PULL_REQUEST, self.pull_request),
            (&mut languages.jira_comment, JIRA_COMMENT, self.jira_comment),
            (&mut languages.discussion, DISCUSSION, self.discussion),
        ] {
            if let Some(language) = update {
                extra.shift_remove(key);
                *slot = Some(language);
            }
        }
    }
}

/// Per-repository language overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct LanguageOverrides {
    pub commit: Setting<Language>,
    pub pull_request: Setting<Language>,
    pub jira_comment: Setting<Language>,
    pub discussion: Setting<Language>,
    pub extra: RawObject,
}

impl From<RawObject> for LanguageOverrides {
    fn from(mut raw: RawObject) -> Self {
        Self {
            commit: raw::take_setting(&mut raw, COMMIT),
            pull_request: raw::take_setting(&mut raw, PULL_REQUEST),
            jira_comment: raw::take_setting(&mut raw, JIRA_COMMENT),
            discussion: raw::take_setting(&mut raw, DISCUSSION),
            extra: raw,
        }
    }
}

impl From<LanguageOverrides> for RawObject {
    fn from(overrides: LanguageOverrides) -> Self {
        let mut raw = RawObject::new();
        raw::put_setting(&mut raw, COMMIT, &overrides.commit);
        raw::put_setting(&mut raw, PULL_REQUEST, &overrides.pull_request);
        raw::put_setting(&mut raw, JIRA_COMMENT, &overrides.jira_comment);
        raw::put_setting(&mut raw, DISCUSSION, &overrides.discussion);
        raw::overlay(raw, overrides.extra)
    }
}

impl LanguageOverrides {
    /// Resolve every key against the global defaults, then English.
    pub fn resolve(&self, global: &GlobalLanguages) -> ResolvedLanguages {
        let pick = |local: Setting<Language>, global: Option<Language>| {
            local.value_or(global.unwrap_or_default())
        };

        ResolvedLanguages {
            commit: pick(self.commit, global.commit),
            pull_request: pick(self.pull_request, global.pull_request),
            jira_comment: pick(self.jira_comment, global.jira_comment),
            discussion: pick(self.discussion, global.discussion),
        }
    }
}

impl SettingsSection for LanguageOverrides {
    fn override_count(&self) -> usize {
        [
            self.commit,
            self.pull_request,
            self.jira_comment,
            self.discussion,
        ]
        .iter()
        .filter(|setting| setting.is_set())
        .count()
    }

    fn extra(&self) -> &RawObject {
        &self.extra
    }
}

/// Languages in effect for a repository after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLanguages {
    pub commit: Language,
    pub pull_request: Language,
    pub jira_comment: Language,
    pub discussion: Language,
}

/// Update to a repository's language overrides.
///
/// `null`/`"default"` drops the override, `"en"`/`"fr"` sets it, anything
/// else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageUpdate {
    #[serde(default, deserialize_with = "deserialize_update")]
    pub commit: Option<Setting<Language>>,

    #[serde(default, deserialize_with = "deserialize_update")]
    pub pull_request: Option<Setting<Language>>,

    #[serde(default, deserialize_with = "deserialize_update")]
    pub jira_comment: Option<Setting<Language>>,

    #[serde(default, deserialize_with = "deserialize_update")]
    pub discussion: Option<Setting<Language>>,
}

impl LanguageUpdate {
    pub fn apply_to(&self, overrides: &mut LanguageOverrides) {
        let extra = &mut overrides.extra;
        raw::apply_setting(&mut overrides.commit, extra, COMMIT, self.commit);
        raw::apply_setting(&mut overrides.pull_request, extra, PULL_REQUEST, self.pull_request);
        raw::apply_setting(&mut overrides.jira_comment, extra, JIRA_COMMENT, self.jira_comment);
        raw::apply_setting(&mut overrides.discussion, extra, DISCUSSION, self.discussion);
    }

    /// Build a fresh override section holding only the values in this update.
    pub fn into_overrides(self) -> LanguageOverrides {
        let mut overrides = LanguageOverrides::default();
        self.apply_to(&mut overrides);
        overrides
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
