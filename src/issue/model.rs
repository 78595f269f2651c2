use serde::{Deserialize, Serialize};

/// A single tracked issue within a project.
///
/// All ten fields are present on every stored document; optional creation
/// fields are persisted as empty strings rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// UUID-based document ID, assigned once at creation
    pub id: String,
    /// Free-text project label taken from the request path
    pub project: String,
    pub issue_title: String,
    pub issue_text: String,
    /// Creation timestamp (UTC, ISO 8601); immutable
    pub created_on: String,
    /// Refreshed on every successful mutation
    pub updated_on: String,
    pub created_by: String,
    pub assigned_to: String,
    pub open: bool,
    pub status_text: String,
}
