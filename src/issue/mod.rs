pub mod crud;
pub mod filter;
pub mod id;
mod model;

pub use crud::{
    create_issue, delete_issue, list_issues, update_issue, CreateIssueOptions, IssueCrudError,
    UpdateIssueOptions,
};
pub use filter::IssueFilter;
pub use id::{generate_issue_id, is_uuid};
pub use model::Issue;
