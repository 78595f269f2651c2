//! Atomic file write operations.
//!
//! Documents are written via a temp file in the target directory followed by
//! a rename, so a crash mid-write never leaves a partial document behind.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// # Errors
///
/// Returns an `io::Error` if:
/// - The parent directory cannot be determined
/// - The temp file cannot be created
/// - Writing to the temp file fails
/// - The atomic rename fails
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    // Run synchronous tempfile operations in a blocking task
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        // Temp file must live in the same directory as the target for the
        // rename to be atomic
        let mut temp_file = NamedTempFile::new_in(&parent)?;

        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;

        // persist() consumes the NamedTempFile, preventing auto-deletion
        temp_file.persist(&target_path)?;

        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
