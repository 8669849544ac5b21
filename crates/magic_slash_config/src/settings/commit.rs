//! Commit message settings.
//!
//! Controls how commit messages are generated for a repository.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::raw::{self, RawObject};
use crate::setting::{deserialize_update, Setting};
use crate::settings::SettingsSection;

/// Layout of generated commit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitStyle {
    /// Subject line only.
    #[default]
    SingleLine,

    /// Subject line, blank line, body.
    MultiLine,
}

impl CommitStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CommitStyle::SingleLine => "single-line",
            CommitStyle::MultiLine => "multi-line",
        }
    }
}

impl From<CommitStyle> for Value {
    fn from(style: CommitStyle) -> Self {
        Value::from(style.as_str())
    }
}

/// Convention used for the commit subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitFormat {
    Conventional,
    #[default]
    Angular,
    Gitmoji,
    /// Free-form subject with no prefix.
    #[serde(rename = "none")]
    Plain,
}

impl CommitFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            CommitFormat::Conventional => "conventional",
            CommitFormat::Angular => "angular",
            CommitFormat::Gitmoji => "gitmoji",
            CommitFormat::Plain => "none",
        }
    }
}

impl From<CommitFormat> for Value {
    fn from(format: CommitFormat) -> Self {
        Value::from(format.as_str())
    }
}

/// Per-repository commit settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct CommitSettings {
    pub style: Setting<CommitStyle>,

    pub format: Setting<CommitFormat>,

    /// Add a `Co-Authored-By` trailer
    pub co_author: Setting<bool>,

    /// Append the ticket identifier to the subject line
    pub include_ticket_id: Setting<bool>,

    pub extra: RawObject,
}

impl From<RawObject> for CommitSettings {
    fn from(mut raw: RawObject) -> Self {
        Self {
            style: raw::take_setting(&mut raw, "style"),
            format: raw::take_setting(&mut raw, "format"),
            co_author: raw::take_setting(&mut raw, "coAuthor"),
            include_ticket_id: raw::take_setting(&mut raw, "includeTicketId"),
            extra: raw,
        }
    }
}

impl From<CommitSettings> for RawObject {
    fn from(settings: CommitSettings) -> Self {
        let mut raw = RawObject::new();
        raw::put_setting(&mut raw, "style", &settings.style);
        raw::put_setting(&mut raw, "format", &settings.format);
        raw::put_setting(&mut raw, "coAuthor", &settings.co_author);
        raw::put_setting(&mut raw, "includeTicketId", &settings.include_ticket_id);
        raw::overlay(raw, settings.extra)
    }
}

impl SettingsSection for CommitSettings {
    fn override_count(&self) -> usize {
        usize::from(self.style.is_set())
            + usize::from(self.format.is_set())
            + usize::from(self.co_author.is_set())
            + usize::from(self.include_ticket_id.is_set())
    }

    fn extra(&self) -> &RawObject {
        &self.extra
    }
}

/// Update to a repository's commit settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitSettingsUpdate {
    #[serde(default, deserialize_with = "deserialize_update")]
    pub style: Option<Setting<CommitStyle>>,

    #[serde(default, deserialize_with = "deserialize_update")]
    pub format: Option<Setting<CommitFormat>>,

    #[serde(default, deserialize_with = "deserialize_update")]
    pub co_author: Option<Setting<bool>>,

    #[serde(default, deserialize_with = "deserialize_update")]
    pub include_ticket_id: Option<Setting<bool>>,
}

impl CommitSettingsUpdate {
    pub fn apply_to(&self, settings: &mut CommitSettings) {
        let extra = &mut settings.extra;
        raw::apply_setting(&mut settings.style, extra, "style", self.style);
        raw::apply_setting(&mut settings.format, extra, "format", self.format);
        raw::apply_setting(&mut settings.co_author, extra, "coAuthor", self.co_author);
        raw::apply_setting(
            &mut settings.include_ticket_id,
            extra,
            "includeTicketId",
            self.include_ticket_id,
        );
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;
