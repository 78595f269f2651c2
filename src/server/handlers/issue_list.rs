use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

use crate::issue::{list_issues, IssueFilter};
use crate::server::response::storage_failure;
use crate::server::AppState;

/// GET /api/issues/{project}
///
/// Returns every issue in the project matching all supplied query filters.
pub async fn list(
    State(state): State<AppState>,
    Path(project): Path<String>,
    Query(filter): Query<IssueFilter>,
) -> Response {
    match list_issues(&state.store, &project, &filter).await {
        Ok(issues) => Json(issues).into_response(),
        Err(e) => {
            error!("Failed to list issues for project {project}: {e}");
            storage_failure()
        }
    }
}
