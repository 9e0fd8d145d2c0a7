//! Single-path file operations.

use std::path::Path;

use crate::ensure::ensure_dir;
use crate::error::{Result, TreeError};
use crate::probe::exists;

/// Read a file's content as UTF-8 text.
pub async fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TreeError::io("read", path, e))
}

/// Read a file's raw bytes.
pub async fn read_file_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path)
        .await
        .map_err(|e| TreeError::io("read", path, e))
}

/// Write `contents` to `path`, creating missing parent directories
/// first and truncating any existing file.
pub async fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| TreeError::io("write", path, e))
}

/// Rename `path` to `new_path`.
///
/// Fails with [`TreeError::NotFound`] when `path` does not exist
/// before the rename is attempted; otherwise delegates to the OS
/// rename and propagates its failure unmodified.
pub async fn rename(path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !exists(path).await {
        return Err(TreeError::not_found(path));
    }
    tokio::fs::rename(path, new_path.as_ref())
        .await
        .map_err(|e| TreeError::io("rename", path, e))
}
