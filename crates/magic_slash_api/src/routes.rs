//! HTTP routing configuration
//!
//! # Route Structure
//!
//! All API routes are prefixed with `/api`:
//!
//! - GET    /api/config - Full configuration
//! - POST   /api/repositories - Add repository
//! - PUT    /api/repositories/:name - Update path/keywords/languages
//! - DELETE /api/repositories/:name - Delete repository
//! - PUT    /api/repositories/:name/languages - Language overrides
//! - PUT    /api/repositories/:name/commit - Commit settings
//! - PUT    /api/repositories/:name/pull-request - Pull request settings
//! - PUT    /api/repositories/:name/issues - Issue settings
//! - GET    /api/repositories/:name/effective - Resolved settings
//! - GET    /api/repositories/:name/pr-template - Read PR template
//! - POST   /api/repositories/:name/pr-template - Create PR template
//! - PUT    /api/repositories/:name/pr-template - Overwrite PR template
//! - PUT    /api/languages - Global language defaults
//! - POST   /api/validate-path - Live path check
//! - POST   /api/shutdown - Stop the server
//! - GET    /api/health - Health check
//!
//! Anything else is served from the static asset directory.

use std::path::Path;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

/// Request timeout for API calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the API router, nested under `/api`.
///
/// This function sets up:
/// - All endpoint routes
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new());

    let api = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/repositories", post(handlers::add_repository))
        .nest("/repositories/:name", repository_routes())
        .route("/languages", put(handlers::update_languages))
        .route("/validate-path", post(handlers::validate_path))
        .route("/shutdown", post(handlers::shutdown))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(trace_layer)
        .with_state(state);

    Router::new().nest("/api", api)
}

/// Create the full application: the API plus static client assets.
///
/// `/` serves `index.html` from `public_dir`.
pub fn create_app(state: AppState, public_dir: &Path) -> Router {
    create_router(state).fallback_service(ServeDir::new(public_dir))
}

/// Routes for a single repository (nested under /repositories/:name)
fn repository_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            put(handlers::update_repository).delete(handlers::delete_repository),
        )
        .route("/languages", put(handlers::update_repository_languages))
        .route("/commit", put(handlers::update_repository_commit_settings))
        .route(
            "/pull-request",
            put(handlers::update_repository_pull_request_settings),
        )
        .route("/issues", put(handlers::update_repository_issues_settings))
        .route("/effective", get(handlers::get_effective_settings))
        .route(
            "/pr-template",
            get(handlers::get_pr_template)
                .post(handlers::create_pr_template)
                .put(handlers::update_pr_template),
        )
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
