use crate::shared::error::StorageError;
use crate::shared::StorageResult;
use std::fs;
use std::path::Path;

/// Validates that `path` names a regular file and returns its size.
///
/// Symbolic links are followed, so a link to a regular file is accepted.
///
/// # Errors
/// - `NotFound` / `PermissionDenied` / `Io` if metadata cannot be read
/// - `Rejected` if the path (or its link target) is not a regular file
pub fn validate_readable_file(path: &Path, key: &str) -> StorageResult<u64> {
    let metadata = fs::metadata(path).map_err(|e| StorageError::from_io(key, &e))?;

    if !metadata.is_file() {
        return Err(StorageError::Rejected {
            key: key.to_string(),
            details: format!("{} is not a regular file", path.display()),
        });
    }

    Ok(metadata.len())
}

/// Validates that `path` may be written to.
///
/// The parent directory must exist, and an existing target (after following
/// symbolic links) must not be a directory.
pub fn validate_write_target(path: &Path, key: &str) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.exists() {
            return Err(StorageError::NotFound {
                key: key.to_string(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            });
        }
    }

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Err(StorageError::Rejected {
            key: key.to_string(),
            details: format!("{} is a directory", path.display()),
        }),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::from_io(key, &e)),
    }
}
