//! Pull request template discovery and creation.
//!
//! GitHub picks up a pull request template from a handful of conventional
//! locations. These helpers find an existing one inside a configured
//! repository, create a default one, or overwrite the one in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::settings::Language;
use crate::validation::expand_path;
use crate::{ConfigError, ConfigResult};

/// Where a new template is written, relative to the repository root.
pub const CANONICAL_TEMPLATE_PATH: &str = ".github/PULL_REQUEST_TEMPLATE.md";

/// Locations searched for an existing template, in priority order.
pub const TEMPLATE_CANDIDATES: [&str; 5] = [
    CANONICAL_TEMPLATE_PATH,
    ".github/pull_request_template.md",
    "docs/pull_request_template.md",
    "PULL_REQUEST_TEMPLATE.md",
    "pull_request_template.md",
];

const DEFAULT_TEMPLATE_EN: &str = "## Summary

<!-- Briefly describe what this PR does -->

## Changes

<!-- List the main changes -->

-

## How to test

<!-- Step-by-step instructions to test -->

1.
2.
3.

## Checklist

- [ ] Code follows project conventions
- [ ] Tests added/updated
- [ ] Documentation updated (if needed)
";

const DEFAULT_TEMPLATE_FR: &str = "## Résumé

<!-- Décrivez brièvement ce que fait cette PR -->

## Changements

<!-- Listez les principaux changements -->

-

## Comment tester

<!-- Instructions étape par étape pour tester -->

1.
2.
3.

## Checklist

- [ ] Le code respecte les conventions du projet
- [ ] Tests ajoutés/mis à jour
- [ ] Documentation mise à jour (si nécessaire)
";

/// A pull request template found in (or written to) a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrTemplate {
    /// Path relative to the repository root, e.g. `.github/PULL_REQUEST_TEMPLATE.md`
    pub path: String,

    pub full_path: PathBuf,

    pub content: String,
}

/// Boilerplate template for the given language.
pub fn default_template(language: Language) -> &'static str {
    match language {
        Language::En => DEFAULT_TEMPLATE_EN,
        Language::Fr => DEFAULT_TEMPLATE_FR,
    }
}

/// Find the first readable template among [`TEMPLATE_CANDIDATES`].
///
/// Candidates that exist but cannot be read are logged and skipped.
pub fn get_pr_template(repo_root: &str) -> Option<PrTemplate> {
    let root = expand_path(repo_root);

    TEMPLATE_CANDIDATES.iter().find_map(|candidate| {
        let full_path = root.join(candidate);
        if !full_path.exists() {
            return None;
        }

        match fs::read_to_string(&full_path) {
            Ok(content) => Some(PrTemplate {
                path: (*candidate).to_string(),
                full_path,
                content,
            }),
            Err(e) => {
                warn!(path = %full_path.display(), error = %e, "Failed to read PR template");
                None
            }
        }
    })
}

/// Write a template to [`CANONICAL_TEMPLATE_PATH`], creating `.github/` if needed.
///
/// Non-empty `content` is written as is; otherwise the default template for
/// `language` is used. An existing file at that location is overwritten.
pub fn create_pr_template(
    repo_root: &str,
    content: Option<&str>,
    language: Language,
) -> ConfigResult<PrTemplate> {
    let full_path = expand_path(repo_root).join(CANONICAL_TEMPLATE_PATH);

    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let content = content
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| default_template(language));

    write_template(&full_path, content)?;
    info!(path = %full_path.display(), language = %language, "Created PR template");

    Ok(PrTemplate {
        path: CANONICAL_TEMPLATE_PATH.to_string(),
        full_path,
        content: content.to_string(),
    })
}

/// Overwrite the template that [`get_pr_template`] finds.
///
/// # Errors
///
/// Returns `ConfigError::TemplateNotFound` when the repository has no
/// template, or `ConfigError::Io` when the write fails.
pub fn update_pr_template(repo_root: &str, content: &str) -> ConfigResult<PrTemplate> {
    let existing = get_pr_template(repo_root).ok_or(ConfigError::TemplateNotFound)?;

    write_template(&existing.full_path, content)?;
    debug!(path = %existing.full_path.display(), "Updated PR template");

    Ok(PrTemplate {
        content: content.to_string(),
        ..existing
    })
}

fn write_template(path: &Path, content: &str) -> ConfigResult<()> {
    fs::write(path, content).map_err(|e| ConfigError::io(path, e))
}

#[cfg(test)]
#[path = "pr_template_tests.rs"]
mod tests;
