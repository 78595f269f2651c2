//! Issue ID utilities for UUID-based document names.

use uuid::Uuid;

/// Check if a string is a valid UUID
#[must_use]
pub fn is_uuid(s: &str) -> bool {
    Uuid::parse_str(s).is_ok()
}

/// Check if a filename is a valid issue document (UUID.json)
#[must_use]
pub fn is_valid_issue_file(name: &str) -> bool {
    name.strip_suffix(".json").is_some_and(is_uuid)
}

/// Generate a new UUID for an issue document
#[must_use]
pub fn generate_issue_id() -> String {
    Uuid::new_v4().to_string()
}

/// Get the short form of an issue ID (first 8 characters)
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
