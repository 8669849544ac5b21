//! Issue tracker settings.

use serde::{Deserialize, Serialize};

use crate::raw::{self, RawObject};
use crate::setting::{deserialize_update, Setting};
use crate::settings::SettingsSection;

/// Built-in value of `commentOnPR` when nothing overrides it.
pub const DEFAULT_COMMENT_ON_PR: bool = true;

// Upper-case `PR`, unlike the camelCase used elsewhere.
const COMMENT_ON_PR_KEY: &str = "commentOnPR";

/// Per-repository issue settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct IssuesSettings {
    /// Post a comment on the ticket when a pull request is opened
    pub comment_on_pr: Setting<bool>,

    pub extra: RawObject,
}

impl From<RawObject> for IssuesSettings {
    fn from(mut raw: RawObject) -> Self {
        Self {
            comment_on_pr: raw::take_setting(&mut raw, COMMENT_ON_PR_KEY),
            extra: raw,
        }
    }
}

impl From<IssuesSettings> for RawObject {
    fn from(settings: IssuesSettings) -> Self {
        let mut raw = RawObject::new();
        raw::put_setting(&mut raw, COMMENT_ON_PR_KEY, &settings.comment_on_pr);
        raw::overlay(raw, settings.extra)
    }
}

impl IssuesSettings {
    pub fn comment_on_pr(&self) -> bool {
        self.comment_on_pr.value_or(DEFAULT_COMMENT_ON_PR)
    }
}

impl SettingsSection for IssuesSettings {
    fn override_count(&self) -> usize {
        usize::from(self.comment_on_pr.is_set())
    }

    fn extra(&self) -> &RawObject {
        &self.extra
    }
}

/// Update to a repository's issue settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssuesSettingsUpdate {
    #[serde(rename = "commentOnPR", default, deserialize_with = "deserialize_update")]
    pub comment_on_pr: Option<Setting<bool>>,
}

impl IssuesSettingsUpdate {
    pub fn apply_to(&self, settings: &mut IssuesSettings) {
        raw::apply_setting(
            &mut settings.comment_on_pr,
            &mut settings.extra,
            COMMENT_ON_PR_KEY,
            self.comment_on_pr,
        );
    }
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
