use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use tracing::error;

use crate::issue::delete_issue;
use crate::server::response::{ActionError, ActionResult};
use crate::server::AppState;

/// DELETE body: only the target `id`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteIssueBody {
    pub id: Option<String>,
}

/// DELETE /api/issues/{project}
///
/// Removes the issue permanently. Like update, the lookup is by `id` alone.
pub async fn delete(
    State(state): State<AppState>,
    Path(_project): Path<String>,
    body: Option<Json<DeleteIssueBody>>,
) -> Response {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let Some(id) = body.id else {
        return Json(ActionError::new("missing id")).into_response();
    };

    match delete_issue(&state.store, &id).await {
        Ok(()) => Json(ActionResult::new("successfully deleted", id)).into_response(),
        Err(e) => {
            error!("Failed to delete issue {id}: {e}");
            Json(ActionError::with_id("could not delete", id)).into_response()
        }
    }
}
