use thiserror::Error;
use tracing::debug;

use super::filter::IssueFilter;
use super::id::{generate_issue_id, short_id};
use super::model::Issue;
use crate::store::{DocumentStore, StoreError};
use crate::utils::now_utc;

#[derive(Error, Debug)]
pub enum IssueCrudError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Issue {0} not found")]
    IssueNotFound(String),

    #[error("Failed to save issue {id}: {source}")]
    SaveFailed {
        id: String,
        #[source]
        source: StoreError,
    },
}

/// Options for creating an issue.
///
/// The three required fields are plain strings; presence is checked at the
/// request boundary before this layer is reached.
#[derive(Debug, Clone)]
pub struct CreateIssueOptions {
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// Options for updating an issue.
///
/// The mutable field set is enumerated here; `id`, `project`, and
/// `created_on` cannot be overwritten through an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateIssueOptions {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl UpdateIssueOptions {
    /// True when no mutable field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }
}

/// Create a new issue in the given project.
///
/// Assigns a fresh UUID, sets `open` to true, defaults the optional fields
/// to empty strings, and stamps both timestamps with the same value.
pub async fn create_issue(
    store: &DocumentStore,
    project: &str,
    options: CreateIssueOptions,
) -> Result<Issue, IssueCrudError> {
    let now = now_utc();
    let issue = Issue {
        id: generate_issue_id(),
        project: project.to_string(),
        issue_title: options.issue_title,
        issue_text: options.issue_text,
        created_on: now.clone(),
        updated_on: now,
        created_by: options.created_by,
        assigned_to: options.assigned_to.unwrap_or_default(),
        open: true,
        status_text: options.status_text.unwrap_or_default(),
    };

    store.insert(&issue).await?;
    debug!("Created issue {} in project {project}", short_id(&issue.id));

    Ok(issue)
}

/// List all issues in a project, narrowed by exact-match filters.
///
/// Order is storage-native and not guaranteed.
pub async fn list_issues(
    store: &DocumentStore,
    project: &str,
    filter: &IssueFilter,
) -> Result<Vec<Issue>, IssueCrudError> {
    let issues = store.find(project, filter).await?;
    Ok(issues)
}

/// Update an existing issue by ID.
///
/// The `project` label does not scope the lookup: IDs are unique across
/// projects. Every present option overwrites the stored field, and
/// `updated_on` is refreshed.
pub async fn update_issue(
    store: &DocumentStore,
    id: &str,
    options: UpdateIssueOptions,
) -> Result<Issue, IssueCrudError> {
    let current = store
        .get(id)
        .await?
        .ok_or_else(|| IssueCrudError::IssueNotFound(id.to_string()))?;

    let updated = Issue {
        id: current.id,
        project: current.project,
        issue_title: options.issue_title.unwrap_or(current.issue_title),
        issue_text: options.issue_text.unwrap_or(current.issue_text),
        created_on: current.created_on,
        updated_on: now_utc(),
        created_by: options.created_by.unwrap_or(current.created_by),
        assigned_to: options.assigned_to.unwrap_or(current.assigned_to),
        open: options.open.unwrap_or(current.open),
        status_text: options.status_text.unwrap_or(current.status_text),
    };

    store
        .put(&updated)
        .await
        .map_err(|source| IssueCrudError::SaveFailed {
            id: id.to_string(),
            source,
        })?;
    debug!("Updated issue {}", short_id(id));

    Ok(updated)
}

/// Delete an issue by ID, permanently.
pub async fn delete_issue(store: &DocumentStore, id: &str) -> Result<(), IssueCrudError> {
    let removed = store.remove(id).await?;
    if !removed {
        return Err(IssueCrudError::IssueNotFound(id.to_string()));
    }
    debug!("Deleted issue {}", short_id(id));

    Ok(())
}
