//! HTTP request type definitions
//!
//! These types accept flexible input from the browser client and are
//! validated in the handlers before reaching the configuration store.
//!
//! HTTP request types have:
//! - Optional fields, so a missing field yields a readable validation message
//! - String types rather than validated domain types
//!
//! The settings endpoints deserialize straight into the domain update types
//! (`LanguageUpdate`, `CommitSettingsUpdate`, ...), which already implement
//! the lenient three-state semantics of the wire format.

use magic_slash_config::validation::parse_keywords;
use magic_slash_config::LanguageUpdate;
use serde::Deserialize;

/// Keywords as sent by clients: either a list or a comma-separated string.
///
/// ```json
/// ["api", "backend"]
/// "api, backend"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeywordsInput {
    List(Vec<String>),
    Text(String),
}

impl KeywordsInput {
    /// Normalize into a keyword list. Lists are taken as given; text is split
    /// on commas with blanks dropped.
    pub fn into_keywords(self) -> Vec<String> {
        match self {
            KeywordsInput::List(keywords) => keywords,
            KeywordsInput::Text(text) => parse_keywords(&text),
        }
    }
}

/// HTTP request to add a repository.
///
/// # Example
///
/// ```json
/// {
///   "name": "api",
///   "path": "~/code/api",
///   "keywords": "api, backend"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddRepositoryRequest {
    pub name: Option<String>,
    pub path: Option<String>,
    pub keywords: Option<KeywordsInput>,
}

/// HTTP request to update a repository's general fields.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRepositoryRequest {
    pub path: Option<String>,
    pub keywords: Option<KeywordsInput>,
    /// Replaces all language overrides at once
    pub languages: Option<LanguageUpdate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatePathRequest {
    pub path: Option<String>,
}

/// HTTP request to create a PR template.
///
/// Without `content` the default template for `language` (`"en"` or
/// `"fr"`, English when absent or unknown) is written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePrTemplateRequest {
    pub content: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePrTemplateRequest {
    pub content: Option<String>,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
