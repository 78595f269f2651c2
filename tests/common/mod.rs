#![allow(dead_code)]

use tempfile::TempDir;
use ticketd::store::DocumentStore;
use ticketd::{create_issue, CreateIssueOptions, Issue};

/// Create a temporary directory for test data
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Open a store rooted in the temp directory
pub async fn open_test_store(temp_dir: &TempDir) -> DocumentStore {
    DocumentStore::open(temp_dir.path())
        .await
        .expect("Failed to open store")
}

/// Seed one issue with the required fields plus optional overrides
pub async fn seed_issue(
    store: &DocumentStore,
    project: &str,
    title: &str,
    created_by: &str,
) -> Issue {
    let options = CreateIssueOptions {
        issue_title: title.to_string(),
        issue_text: format!("{title} text"),
        created_by: created_by.to_string(),
        assigned_to: None,
        status_text: None,
    };
    create_issue(store, project, options)
        .await
        .expect("Should create issue")
}
