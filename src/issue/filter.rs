use serde::Deserialize;

use super::model::Issue;

/// Exact-match equality filters for listing issues.
///
/// Each field is an independent constraint; absent fields impose none. The
/// struct deserializes directly from the GET query string, so `open` arrives
/// as a real boolean and everything else as strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFilter {
    pub id: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub open: Option<bool>,
    pub status_text: Option<String>,
}

impl IssueFilter {
    /// True when every supplied constraint matches the issue exactly.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.id.as_ref().is_none_or(|v| issue.id == *v)
            && self
                .issue_title
                .as_ref()
                .is_none_or(|v| issue.issue_title == *v)
            && self
                .issue_text
                .as_ref()
                .is_none_or(|v| issue.issue_text == *v)
            && self
                .created_on
                .as_ref()
                .is_none_or(|v| issue.created_on == *v)
            && self
                .updated_on
                .as_ref()
                .is_none_or(|v| issue.updated_on == *v)
            && self
                .created_by
                .as_ref()
                .is_none_or(|v| issue.created_by == *v)
            && self
                .assigned_to
                .as_ref()
                .is_none_or(|v| issue.assigned_to == *v)
            && self.open.is_none_or(|v| issue.open == v)
            && self
                .status_text
                .as_ref()
                .is_none_or(|v| issue.status_text == *v)
    }
}
