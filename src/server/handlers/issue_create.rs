use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::error;

use crate::issue::{create_issue, CreateIssueOptions};
use crate::server::response::{storage_failure, ActionError};
use crate::server::AppState;

/// POST body. All fields optional at the wire level; the three required ones
/// are presence-checked before any storage access.
#[derive(Debug, Default, Deserialize)]
pub struct CreateIssueBody {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// POST /api/issues/{project}
///
/// Creates an issue and returns the full ten-field record.
pub async fn create(
    State(state): State<AppState>,
    Path(project): Path<String>,
    body: Option<Json<CreateIssueBody>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let (Some(issue_title), Some(issue_text), Some(created_by)) =
        (body.issue_title, body.issue_text, body.created_by)
    else {
        return Json(ActionError::new("required field(s) missing")).into_response();
    };

    let options = CreateIssueOptions {
        issue_title,
        issue_text,
        created_by,
        assigned_to: body.assigned_to,
        status_text: body.status_text,
    };

    match create_issue(&state.store, &project, options).await {
        Ok(issue) => Json(issue).into_response(),
        Err(e) => {
            error!("Failed to create issue in project {project}: {e}");
            storage_failure()
        }
    }
}
