//! HTTP response type definitions
//!
//! Every mutating endpoint answers with the complete updated configuration so
//! the client can replace its copy wholesale.

use magic_slash_config::Config;
use serde::{Deserialize, Serialize};

/// Response to a successful configuration mutation.
///
/// # Example
///
/// ```json
/// {
///   "success": true,
///   "warning": "Not a git repository",
///   "config": { "version": "1.4.0", "repositories": {}, "languages": {} }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub success: bool,

    /// Non-fatal remark about the submitted path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    pub config: Config,
}

impl MutationResponse {
    pub fn new(config: Config) -> Self {
        Self {
            success: true,
            warning: None,
            config,
        }
    }

    pub fn with_warning(config: Config, warning: Option<String>) -> Self {
        Self {
            warning,
            ..Self::new(config)
        }
    }
}

/// Response to `POST /api/validate-path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePathResponse {
    pub is_git: bool,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded_path: Option<String>,
}

/// Response to `GET /api/repositories/:name/pr-template`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrTemplateResponse {
    pub exists: bool,

    /// Path relative to the repository root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PrTemplateResponse {
    pub fn missing() -> Self {
        Self {
            exists: false,
            path: None,
            content: None,
        }
    }
}

/// Response to creating or overwriting a PR template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateWriteResponse {
    pub success: bool,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownResponse {
    pub success: bool,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "healthy" while the server answers
    pub status: String,

    pub version: String,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
