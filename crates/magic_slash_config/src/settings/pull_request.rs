//! Pull request settings.

use serde::{Deserialize, Serialize};

use crate::raw::{self, RawObject};
use crate::setting::{deserialize_update, Setting};
use crate::settings::SettingsSection;

/// Built-in value of `autoLinkTickets` when nothing overrides it.
pub const DEFAULT_AUTO_LINK_TICKETS: bool = true;

/// Per-repository pull request settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawObject", into = "RawObject")]
pub struct PullRequestSettings {
    /// Link referenced tickets in the pull request description
    pub auto_link_tickets: Setting<bool>,

    pub extra: RawObject,
}

impl From<RawObject> for PullRequestSettings {
    fn from(mut raw: RawObject) -> Self {
        Self {
            auto_link_tickets: raw::take_setting(&mut raw, "autoLinkTickets"),
            extra: raw,
        }
    }
}

impl From<PullRequestSettings> for RawObject {
    fn from(settings: PullRequestSettings) -> Self {
        let mut raw = RawObject::new();
        raw::put_setting(&mut raw, "autoLinkTickets", &settings.auto_link_tickets);
        raw::overlay(raw, settings.extra)
    }
}

impl PullRequestSettings {
    pub fn auto_link_tickets(&self) -> bool {
        self.auto_link_tickets.value_or(DEFAULT_AUTO_LINK_TICKETS)
    }
}

impl SettingsSection for PullRequestSettings {
    fn override_count(&self) -> usize {
        usize::from(self.auto_link_tickets.is_set())
    }

    fn extra(&self) -> &RawObject {
        &self.extra
    }
}

/// Update to a repository's pull request settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestSettingsUpdate {
    #[serde(default, deserialize_with = "deserialize_update")]
    pub auto_link_tickets: Option<Setting<bool>>,
}

impl PullRequestSettingsUpdate {
    pub fn apply_to(&self, settings: &mut PullRequestSettings) {
        raw::apply_setting(
            &mut settings.auto_link_tickets,
            &mut settings.extra,
            "autoLinkTickets",
            self.auto_link_tickets,
        );
    }
}

#[cfg(test)]
#[path = "pull_request_tests.rs"]
mod tests;
