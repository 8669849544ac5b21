//! Effective settings for a repository.
//!
//! Resolves every override in precedence order: repository value, then global
//! default (languages only), then the built-in default.

use serde::Serialize;

use crate::settings::{CommitFormat, CommitSettings, CommitStyle, ResolvedLanguages};
use crate::{Config, ConfigError, ConfigResult};

const EXAMPLE_SUBJECT: &str = "add user authentication";
const EXAMPLE_BODY: &str = "Implement login flow with session management";
const EXAMPLE_TICKET: &str = "[PROJ-123]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveCommit {
    pub style: CommitStyle,
    pub format: CommitFormat,
    pub co_author: bool,
    pub include_ticket_id: bool,
}

impl EffectiveCommit {
    pub fn resolve(settings: Option<&CommitSettings>) -> Self {
        let settings = settings.cloned().unwrap_or_default();
        Self {
            style: settings.style.value_or(CommitStyle::default()),
            format: settings.format.value_or(CommitFormat::default()),
            co_author: settings.co_author.value_or(false),
            include_ticket_id: settings.include_ticket_id.value_or(false),
        }
    }

    /// Sample commit message showing what these settings produce.
    pub fn example(&self) -> String {
        commit_example(self.format, self.style, self.include_ticket_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePullRequest {
    pub auto_link_tickets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveIssues {
    #[serde(rename = "commentOnPR")]
    pub comment_on_pr: bool,
}

/// Every setting in force for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub languages: ResolvedLanguages,
    pub commit: EffectiveCommit,
    pub pull_request: EffectivePullRequest,
    pub issues: EffectiveIssues,
    /// Number of settings the repository overrides explicitly
    pub custom_setting_count: usize,
    pub commit_example: String,
}

impl EffectiveSettings {
    /// Resolve the settings of the named repository.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` when the repository is not configured.
    pub fn resolve(config: &Config, name: &str) -> ConfigResult<Self> {
        let repository = config
            .repository(name)
            .ok_or_else(|| ConfigError::not_found(name))?;

        let languages = repository
            .languages
            .clone()
            .unwrap_or_default()
            .resolve(&config.languages);
        let commit = EffectiveCommit::resolve(repository.commit.as_ref());
        let pull_request = repository.pull_request.clone().unwrap_or_default();
        let issues = repository.issues.clone().unwrap_or_default();

        Ok(Self {
            languages,
            commit,
            pull_request: EffectivePullRequest {
                auto_link_tickets: pull_request.auto_link_tickets(),
            },
            issues: EffectiveIssues {
                comment_on_pr: issues.comment_on_pr(),
            },
            custom_setting_count: repository.custom_setting_count(),
            commit_example: commit.example(),
        })
    }
}

/// Render a sample commit message for a format/style combination.
///
/// # Examples
///
/// ```rust
/// use magic_slash_config::effective::commit_example;
/// use magic_slash_config::{CommitFormat, CommitStyle};
///
/// assert_eq!(
///     commit_example(CommitFormat::Angular, CommitStyle::SingleLine, true),
///     "feat(auth): add user authentication [PROJ-123]"
/// );
/// ```
pub fn commit_example(format: CommitFormat, style: CommitStyle, include_ticket_id: bool) -> String {
    let mut subject = match format {
        CommitFormat::Conventional => format!("feat: {EXAMPLE_SUBJECT}"),
        CommitFormat::Angular => format!("feat(auth): {EXAMPLE_SUBJECT}"),
        CommitFormat::Gitmoji => format!("\u{2728} {EXAMPLE_SUBJECT}"),
        CommitFormat::Plain => "Add user authentication".to_string(),
    };

    if include_ticket_id {
        subject.push(' ');
        subject.push_str(EXAMPLE_TICKET);
    }

    match style {
        CommitStyle::SingleLine => subject,
        CommitStyle::MultiLine => format!("{subject}\n\n{EXAMPLE_BODY}"),
    }
}

#[cfg(test)]
#[path = "effective_tests.rs"]
mod tests;
