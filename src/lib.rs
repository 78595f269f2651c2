// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

pub mod cors;
pub mod issue;
pub mod logging;
pub mod server;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use issue::{
    create_issue, delete_issue, list_issues, update_issue, CreateIssueOptions, Issue,
    IssueCrudError, IssueFilter, UpdateIssueOptions,
};
pub use server::{router, AppState};
pub use store::{DocumentStore, StoreError};
