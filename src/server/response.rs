//! Typed result-or-error bodies for the issue API.
//!
//! Every defined outcome is serialized with HTTP 200, matching the behavior
//! clients of this API expect; only an unexpected storage failure surfaces
//! as a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Success body for update/delete: `{"result": ..., "id": ...}`.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub result: &'static str,
    pub id: String,
}

impl ActionResult {
    pub fn new(result: &'static str, id: impl Into<String>) -> Self {
        Self {
            result,
            id: id.into(),
        }
    }
}

/// Error body: `{"error": ...}` with the attempted `id` when one was named.
#[derive(Debug, Serialize)]
pub struct ActionError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ActionError {
    pub fn new(error: &'static str) -> Self {
        Self { error, id: None }
    }

    pub fn with_id(error: &'static str, id: impl Into<String>) -> Self {
        Self {
            error,
            id: Some(id.into()),
        }
    }
}

/// 500 response for storage faults on list/create.
///
/// The source implementation logged these and never answered the request;
/// here the fault is reported to the caller instead.
pub fn storage_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ActionError::new("storage failure")),
    )
        .into_response()
}
