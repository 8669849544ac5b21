//! Request extractors.

use axum::extract::FromRequest;

use crate::errors::ApiError;

/// JSON body extractor whose rejection renders as a 400 `{ "error": ... }`
/// body instead of axum's plain-text default.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
