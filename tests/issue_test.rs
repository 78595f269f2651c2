#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_dir, open_test_store, seed_issue};
use ticketd::issue::is_uuid;
use ticketd::{
    create_issue, delete_issue, list_issues, update_issue, CreateIssueOptions, IssueCrudError,
    IssueFilter, UpdateIssueOptions,
};

#[tokio::test]
async fn test_create_issue_with_every_field() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let options = CreateIssueOptions {
        issue_title: "Broken build".to_string(),
        issue_text: "CI fails on main".to_string(),
        created_by: "Alice".to_string(),
        assigned_to: Some("Bob".to_string()),
        status_text: Some("triage".to_string()),
    };

    let issue = create_issue(&store, "apitest", options)
        .await
        .expect("Should create issue");

    assert!(is_uuid(&issue.id), "Issue ID should be a UUID");
    assert_eq!(issue.project, "apitest");
    assert_eq!(issue.issue_title, "Broken build");
    assert_eq!(issue.issue_text, "CI fails on main");
    assert_eq!(issue.created_by, "Alice");
    assert_eq!(issue.assigned_to, "Bob");
    assert_eq!(issue.status_text, "triage");
    assert!(issue.open);
    assert_eq!(issue.created_on, issue.updated_on);
}

#[tokio::test]
async fn test_create_issue_defaults_optional_fields() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let options = CreateIssueOptions {
        issue_title: "Title only".to_string(),
        issue_text: "Text".to_string(),
        created_by: "Alice".to_string(),
        assigned_to: None,
        status_text: None,
    };

    let issue = create_issue(&store, "apitest", options)
        .await
        .expect("Should create issue");

    assert_eq!(issue.assigned_to, "");
    assert_eq!(issue.status_text, "");
    assert!(issue.open);
}

#[tokio::test]
async fn test_list_issues_scopes_by_project() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    seed_issue(&store, "alpha", "First", "Alice").await;
    seed_issue(&store, "alpha", "Second", "Bob").await;
    seed_issue(&store, "beta", "Other", "Alice").await;

    let issues = list_issues(&store, "alpha", &IssueFilter::default())
        .await
        .expect("Should list");

    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.project == "alpha"));
}

#[tokio::test]
async fn test_list_issues_applies_filters() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    seed_issue(&store, "alpha", "First", "Alice").await;
    seed_issue(&store, "alpha", "Second", "Bob").await;

    let filter = IssueFilter {
        created_by: Some("Alice".to_string()),
        ..Default::default()
    };
    let issues = list_issues(&store, "alpha", &filter)
        .await
        .expect("Should list");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].created_by, "Alice");
}

#[tokio::test]
async fn test_list_issues_intersects_two_filters() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let target = seed_issue(&store, "alpha", "First", "Alice").await;
    seed_issue(&store, "alpha", "Second", "Alice").await;

    let filter = IssueFilter {
        created_by: Some("Alice".to_string()),
        issue_title: Some("First".to_string()),
        ..Default::default()
    };
    let issues = list_issues(&store, "alpha", &filter)
        .await
        .expect("Should list");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id, target.id);
}

#[tokio::test]
async fn test_update_issue_single_field() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let issue = seed_issue(&store, "alpha", "First", "Alice").await;

    let options = UpdateIssueOptions {
        issue_text: Some("New text".to_string()),
        ..Default::default()
    };
    let updated = update_issue(&store, &issue.id, options)
        .await
        .expect("Should update");

    assert_eq!(updated.issue_text, "New text");
    // Untouched fields survive
    assert_eq!(updated.issue_title, "First");
    assert_eq!(updated.created_on, issue.created_on);
    assert!(updated.updated_on >= updated.created_on);
}

#[tokio::test]
async fn test_update_issue_multiple_fields_atomically() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let issue = seed_issue(&store, "alpha", "First", "Alice").await;

    let options = UpdateIssueOptions {
        issue_title: Some("Renamed".to_string()),
        assigned_to: Some("Bob".to_string()),
        open: Some(false),
        ..Default::default()
    };
    update_issue(&store, &issue.id, options)
        .await
        .expect("Should update");

    // All changes visible on the next read
    let reread = list_issues(
        &store,
        "alpha",
        &IssueFilter {
            id: Some(issue.id.clone()),
            ..Default::default()
        },
    )
    .await
    .expect("Should list");

    assert_eq!(reread.len(), 1);
    assert_eq!(reread[0].issue_title, "Renamed");
    assert_eq!(reread[0].assigned_to, "Bob");
    assert!(!reread[0].open);
}

#[tokio::test]
async fn test_update_issue_unknown_id() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let options = UpdateIssueOptions {
        issue_text: Some("New text".to_string()),
        ..Default::default()
    };
    let result = update_issue(&store, "not-a-real-id", options).await;

    assert!(matches!(result, Err(IssueCrudError::IssueNotFound(_))));
}

#[tokio::test]
async fn test_delete_issue_then_gone() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let issue = seed_issue(&store, "alpha", "First", "Alice").await;

    delete_issue(&store, &issue.id).await.expect("Should delete");

    let remaining = list_issues(&store, "alpha", &IssueFilter::default())
        .await
        .expect("Should list");
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_delete_issue_twice_fails_second_time() {
    let temp_dir = create_test_dir();
    let store = open_test_store(&temp_dir).await;

    let issue = seed_issue(&store, "alpha", "First", "Alice").await;

    delete_issue(&store, &issue.id).await.expect("Should delete");
    let second = delete_issue(&store, &issue.id).await;

    assert!(matches!(second, Err(IssueCrudError::IssueNotFound(_))));
}
