pub mod issue_create;
pub mod issue_delete;
pub mod issue_list;
pub mod issue_update;
