//! Small filesystem helpers shared by the cleaning operations.

use std::path::Path;

use super::error::WorkspaceError;

/// Remove every entry inside `dir`, keeping `dir` itself. Creates `dir` when missing.
///
/// Stops at the first failure.
pub(crate) fn empty_dir(dir: &Path) -> Result<usize, WorkspaceError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            std::fs::create_dir_all(dir).map_err(|e| WorkspaceError::io(dir, e))?;
            return Ok(0);
        }
        Err(err) => return Err(WorkspaceError::io(dir, err)),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry.map_err(|e| WorkspaceError::io(dir, e))?;
        remove_entry(&entry.path())?;
        removed += 1;
    }
    Ok(removed)
}

/// Remove a file, symlink, or directory tree.
pub(crate) fn remove_entry(path: &Path) -> Result<(), WorkspaceError> {
    let file_type = std::fs::symlink_metadata(path)
        .map_err(|e| WorkspaceError::io(path, e))?
        .file_type();
    let result = if file_type.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|e| WorkspaceError::io(path, e))
}
