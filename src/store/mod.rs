//! File-backed document store.
//!
//! One JSON document per issue under `<data_dir>/issues/<uuid>.json`. The
//! store is opened once at startup and passed by handle; it keeps no
//! in-process state between calls, so concurrent requests see whatever the
//! filesystem ordered (last write wins).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::warn;

use crate::issue::filter::IssueFilter;
use crate::issue::id::{is_uuid, is_valid_issue_file};
use crate::issue::Issue;
use crate::utils::atomic_write;

/// The collection folder under the data directory
pub const ISSUES_FOLDER: &str = "issues";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the issue collection on disk.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    issues_dir: PathBuf,
}

impl DocumentStore {
    /// Open (and create if needed) the collection under `data_dir`.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let issues_dir = data_dir.as_ref().join(ISSUES_FOLDER);
        fs::create_dir_all(&issues_dir).await?;
        Ok(Self { issues_dir })
    }

    /// Document IDs double as filenames; only UUIDs are accepted, which also
    /// keeps caller-supplied IDs from escaping the collection directory.
    fn document_path(&self, id: &str) -> PathBuf {
        self.issues_dir.join(format!("{id}.json"))
    }

    /// Persist a new document.
    pub async fn insert(&self, issue: &Issue) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(issue)?;
        atomic_write(&self.document_path(&issue.id), &content).await?;
        Ok(())
    }

    /// Fetch a document by ID. Returns `None` for unknown or malformed IDs.
    pub async fn get(&self, id: &str) -> Result<Option<Issue>, StoreError> {
        if !is_uuid(id) {
            return Ok(None);
        }

        match fs::read_to_string(self.document_path(id)).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite an existing document in place.
    pub async fn put(&self, issue: &Issue) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(issue)?;
        atomic_write(&self.document_path(&issue.id), &content).await?;
        Ok(())
    }

    /// Remove a document by ID. Returns whether a document was removed.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        if !is_uuid(id) {
            return Ok(false);
        }

        match fs::remove_file(self.document_path(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Scan the collection for documents in `project` matching `filter`.
    ///
    /// Foreign or unreadable files in the collection directory are skipped
    /// with a warning rather than failing the whole scan.
    pub async fn find(
        &self,
        project: &str,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, StoreError> {
        let mut issues = Vec::new();
        let mut entries = fs::read_dir(&self.issues_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !is_valid_issue_file(name) {
                continue;
            }

            let content = match fs::read_to_string(entry.path()).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable document {name}: {e}");
                    continue;
                }
            };

            match serde_json::from_str::<Issue>(&content) {
                Ok(issue) => {
                    if issue.project == project && filter.matches(&issue) {
                        issues.push(issue);
                    }
                }
                Err(e) => {
                    warn!("Skipping malformed document {name}: {e}");
                }
            }
        }

        Ok(issues)
    }
}
