use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::error;

use crate::issue::{update_issue, IssueCrudError, UpdateIssueOptions};
use crate::server::response::{ActionError, ActionResult};
use crate::server::AppState;

/// PUT body: the target `id` plus the enumerated mutable fields. `project`
/// and `created_on` are not updatable through this endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateIssueBody {
    pub id: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

/// PUT /api/issues/{project}
///
/// Looks up by `id` alone; the project path segment does not scope the
/// lookup since IDs are unique across projects.
pub async fn update(
    State(state): State<AppState>,
    Path(_project): Path<String>,
    body: Option<Json<UpdateIssueBody>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let Some(id) = body.id else {
        return Json(ActionError::new("missing id")).into_response();
    };

    let options = UpdateIssueOptions {
        issue_title: body.issue_title,
        issue_text: body.issue_text,
        created_by: body.created_by,
        assigned_to: body.assigned_to,
        status_text: body.status_text,
        open: body.open,
    };

    if options.is_empty() {
        return Json(ActionError::with_id("no update field(s) sent", id)).into_response();
    }

    match update_issue(&state.store, &id, options).await {
        Ok(issue) => Json(ActionResult::new("successfully updated", issue.id)).into_response(),
        Err(IssueCrudError::SaveFailed { source, .. }) => {
            error!("Failed to save issue {id}: {source}");
            Json(ActionError::with_id("could not save", id)).into_response()
        }
        Err(e) => {
            // Not found and lookup faults collapse to the same outcome
            error!("Failed to update issue {id}: {e}");
            Json(ActionError::with_id("could not update", id)).into_response()
        }
    }
}
