//! Translation between domain types and HTTP types
//!
//! Conversions happen at the API boundary so handlers stay free of field
//! plumbing.

use magic_slash_config::{GitStatus, Language, PathWarning, PrTemplate};

use crate::models::{
    request::KeywordsInput,
    response::{PrTemplateResponse, TemplateWriteResponse, ValidatePathResponse},
};

impl From<GitStatus> for ValidatePathResponse {
    fn from(status: GitStatus) -> Self {
        Self {
            is_git: status.is_git,
            exists: status.exists,
            expanded_path: status
                .expanded_path
                .map(|path| path.to_string_lossy().into_owned()),
        }
    }
}

impl From<Option<PrTemplate>> for PrTemplateResponse {
    fn from(template: Option<PrTemplate>) -> Self {
        match template {
            Some(template) => Self {
                exists: true,
                path: Some(template.path),
                content: Some(template.content),
            },
            None => Self::missing(),
        }
    }
}

impl From<PrTemplate> for TemplateWriteResponse {
    fn from(template: PrTemplate) -> Self {
        Self {
            success: true,
            path: template.path,
        }
    }
}

/// Client-facing text of a path warning.
pub fn warning_message(warning: Option<PathWarning>) -> Option<String> {
    warning.map(|warning| warning.message().to_string())
}

/// Language requested for a new PR template, English unless `"fr"` is asked for.
pub fn template_language(code: Option<&str>) -> Language {
    code.and_then(Language::from_code).unwrap_or_default()
}

/// Keywords from an optional client field.
pub fn keywords_from(input: Option<KeywordsInput>) -> Option<Vec<String>> {
    input.map(KeywordsInput::into_keywords)
}

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;
