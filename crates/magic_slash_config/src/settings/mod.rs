//! Repository settings sections.
//!
//! Each section groups related overrides stored under one key of a repository
//! entry (`languages`, `commit`, `pullRequest`, `issues`). A section with no
//! overrides is removed from the entry entirely. Keys a section does not
//! understand are kept and count as content.

pub mod commit;
pub mod issues;
pub mod language;
pub mod pull_request;

pub use commit::{CommitFormat, CommitSettings, CommitSettingsUpdate, CommitStyle};
pub use issues::{IssuesSettings, IssuesSettingsUpdate};
pub use language::{
    GlobalLanguages, GlobalLanguagesUpdate, Language, LanguageOverrides, LanguageUpdate,
    ResolvedLanguages,
};
pub use pull_request::{PullRequestSettings, PullRequestSettingsUpdate};

use crate::raw::RawObject;

/// A group of repository overrides that is pruned when empty.
pub trait SettingsSection: Default {
    /// Number of settings explicitly overridden in this section.
    fn override_count(&self) -> usize;

    /// Keys kept verbatim from the file.
    fn extra(&self) -> &RawObject;

    fn is_empty(&self) -> bool {
        self.override_count() == 0 && self.extra().is_empty()
    }
}

/// Mutate an optional section in place, pruning it when it ends up empty.
pub(crate) fn update_section<S, F>(slot: &mut Option<S>, mutate: F)
where
    S: SettingsSection,
    F: FnOnce(&mut S),
{
    let mut section = slot.take().unwrap_or_default();
    mutate(&mut section);
    if !section.is_empty() {
        *slot = Some(section);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
