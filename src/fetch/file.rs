//! Whole-file reading

use crate::error::AcquireError;
use std::fs;
use std::path::Path;

/// Read the whole file at `path`.
///
/// Directories are rejected up front so the error names the actual problem
/// on every platform.
pub fn read_file(path: &Path) -> Result<Vec<u8>, AcquireError> {
    if path.is_dir() {
        return Err(AcquireError::IsDirectory { path: path.to_path_buf() });
    }

    let content = fs::read(path)
        .map_err(|source| AcquireError::ReadFile { path: path.to_path_buf(), source })?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
