//! HTTP request handlers
//!
//! Each handler:
//! 1. Extracts HTTP request data (path params, body)
//! 2. Validates it with the `magic_slash_config` validation helpers
//! 3. Delegates to the configuration store or PR template helpers
//! 4. Translates the result to an HTTP response
//!
//! Filesystem work is small and synchronous, so it runs inline.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use magic_slash_config::{
    pr_template,
    validation::{is_git_repository, validate_repo_name, validate_repo_path},
    CommitSettingsUpdate, Config, ConfigError, EffectiveSettings, GlobalLanguagesUpdate,
    IssuesSettingsUpdate, LanguageUpdate, PullRequestSettingsUpdate, RepositoryUpdate,
};

use crate::{
    errors::{ApiError, ConfigResultExt},
    extract::ApiJson,
    models::{request::*, response::*},
    translation::{keywords_from, template_language, warning_message},
    AppState,
};

/// Delay between answering a shutdown request and stopping the server
pub const SHUTDOWN_DELAY: Duration = Duration::from_millis(500);

/// GET /api/config
pub async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(state.store.read_config())
}

/// POST /api/repositories
///
/// Validates the name, rejects a name already in use, then validates the
/// path. Stores the expanded path and reports a warning when the directory is
/// missing or not a git repository.
pub async fn add_repository(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddRepositoryRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    const CONTEXT: &str = "Failed to add repository";

    let name = validate_repo_name(request.name.as_deref()).or_api_error(CONTEXT)?;
    if state.store.read_config().contains_repository(&name) {
        return Err(ApiError::from_config(
            ConfigError::AlreadyExists {
                name: name.to_string(),
            },
            CONTEXT,
        ));
    }
    let path = validate_repo_path(request.path.as_deref().unwrap_or_default())
        .or_api_error(CONTEXT)?;
    let keywords = keywords_from(request.keywords).unwrap_or_default();

    let config = state
        .store
        .add_repository(&name, &path.expanded_path_string(), keywords)
        .or_api_error(CONTEXT)?;

    Ok(Json(MutationResponse::with_warning(
        config,
        warning_message(path.warning),
    )))
}

/// PUT /api/repositories/:name
pub async fn update_repository(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(request): ApiJson<UpdateRepositoryRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    const CONTEXT: &str = "Failed to update repository";

    let path = request
        .path
        .as_deref()
        .map(validate_repo_path)
        .transpose()
        .or_api_error(CONTEXT)?
        .map(|validated| validated.expanded_path_string());

    let update = RepositoryUpdate {
        path,
        keywords: keywords_from(request.keywords),
        languages: request.languages,
    };

    let config = state
        .store
        .update_repository(&name, update)
        .or_api_error(CONTEXT)?;
    Ok(Json(MutationResponse::new(config)))
}

/// DELETE /api/repositories/:name
pub async fn delete_repository(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MutationResponse>, ApiError> {
    let config = state
        .store
        .delete_repository(&name)
        .or_api_error("Failed to delete repository")?;
    Ok(Json(MutationResponse::new(config)))
}

/// PUT /api/languages
pub async fn update_languages(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<GlobalLanguagesUpdate>,
) -> Result<Json<MutationResponse>, ApiError> {
    let config = state
        .store
        .update_languages(&update)
        .or_api_error("Failed to update language settings")?;
    Ok(Json(MutationResponse::new(config)))
}

/// PUT /api/repositories/:name/languages
pub async fn update_repository_languages(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(update): ApiJson<LanguageUpdate>,
) -> Result<Json<MutationResponse>, ApiError> {
    let config = state
        .store
        .update_repository_languages(&name, &update)
        .or_api_error("Failed to update repository language settings")?;
    Ok(Json(MutationResponse::new(config)))
}

/// PUT /api/repositories/:name/commit
pub async fn update_repository_commit_settings(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(update): ApiJson<CommitSettingsUpdate>,
) -> Result<Json<MutationResponse>, ApiError> {
    let config = state
        .store
        .update_repository_commit_settings(&name, &update)
        .or_api_error("Failed to update repository commit settings")?;
    Ok(Json(MutationResponse::new(config)))
}

/// PUT /api/repositories/:name/pull-request
pub async fn update_repository_pull_request_settings(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(update): ApiJson<PullRequestSettingsUpdate>,
) -> Result<Json<MutationResponse>, ApiError> {
    let config = state
        .store
        .update_repository_pull_request_settings(&name, &update)
        .or_api_error("Failed to update repository pull request settings")?;
    Ok(Json(MutationResponse::new(config)))
}

/// PUT /api/repositories/:name/issues
pub async fn update_repository_issues_settings(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(update): ApiJson<IssuesSettingsUpdate>,
) -> Result<Json<MutationResponse>, ApiError> {
    let config = state
        .store
        .update_repository_issues_settings(&name, &update)
        .or_api_error("Failed to update repository issues settings")?;
    Ok(Json(MutationResponse::new(config)))
}

/// GET /api/repositories/:name/effective
pub async fn get_effective_settings(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<EffectiveSettings>, ApiError> {
    let config = state.store.read_config();
    let effective = EffectiveSettings::resolve(&config, &name)
        .or_api_error("Failed to resolve effective settings")?;
    Ok(Json(effective))
}

/// POST /api/validate-path
///
/// Live feedback while a path is typed; never fails for a missing directory.
pub async fn validate_path(
    ApiJson(request): ApiJson<ValidatePathRequest>,
) -> Result<Json<ValidatePathResponse>, ApiError> {
    let path = request
        .path
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ApiError::validation("Path is required"))?;

    Ok(Json(is_git_repository(&path).into()))
}

/// GET /api/repositories/:name/pr-template
pub async fn get_pr_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PrTemplateResponse>, ApiError> {
    let repo_path = repository_path(&state, &name)?;
    Ok(Json(pr_template::get_pr_template(&repo_path).into()))
}

/// POST /api/repositories/:name/pr-template
pub async fn create_pr_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(request): ApiJson<CreatePrTemplateRequest>,
) -> Result<Json<TemplateWriteResponse>, ApiError> {
    let repo_path = repository_path(&state, &name)?;
    let language = template_language(request.language.as_deref());

    let template =
        pr_template::create_pr_template(&repo_path, request.content.as_deref(), language)
            .or_api_error("Failed to create PR template")?;
    Ok(Json(template.into()))
}

/// PUT /api/repositories/:name/pr-template
///
/// Overwrites the existing template wherever it was found.
pub async fn update_pr_template(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(request): ApiJson<UpdatePrTemplateRequest>,
) -> Result<Json<TemplateWriteResponse>, ApiError> {
    let repo_path = repository_path(&state, &name)?;
    let content = request
        .content
        .ok_or_else(|| ApiError::validation("Content is required"))?;

    let template = pr_template::update_pr_template(&repo_path, &content)
        .or_api_error("Failed to update PR template")?;
    Ok(Json(template.into()))
}

/// POST /api/shutdown
///
/// Answers first, then signals the server to stop after [`SHUTDOWN_DELAY`].
pub async fn shutdown(State(state): State<AppState>) -> Json<ShutdownResponse> {
    tracing::info!("Shutdown requested by client");

    let signal = state.shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(SHUTDOWN_DELAY).await;
        signal.notify_one();
    });

    Json(ShutdownResponse {
        success: true,
        message: "Server shutting down...".to_string(),
    })
}

/// GET /api/health
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Path of a configured repository.
fn repository_path(state: &AppState, name: &str) -> Result<String, ApiError> {
    state
        .store
        .read_config()
        .repository(name)
        .map(|repository| repository.path.clone())
        .ok_or_else(|| ApiError::not_found(format!("Repository '{name}' not found")))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
