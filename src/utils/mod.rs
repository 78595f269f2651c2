mod atomic;

pub use atomic::atomic_write;

use std::path::PathBuf;

/// The name of the ticketd data folder under the home directory
pub const TICKETD_FOLDER: &str = ".ticketd";

/// Default data directory (~/.ticketd)
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TICKETD_FOLDER)
}

/// Default log directory (~/.ticketd/logs)
#[must_use]
pub fn default_log_dir() -> PathBuf {
    default_data_dir().join("logs")
}

/// Get the current timestamp as the string form of the current UTC time (ISO 8601)
#[must_use]
pub fn now_utc() -> String {
    chrono::Utc::now().to_rfc3339()
}
