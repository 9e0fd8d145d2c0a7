//! Tolerant immediate-children listing.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};

use crate::entry::DirEntry;
use crate::probe::probe;
use crate::util::MAX_IN_FLIGHT;

/// List the immediate children of `path` with type classification.
///
/// A missing or unreadable directory yields an empty vec rather than
/// an error: listings compose into bulk tree operations, where a
/// vanished directory must not abort the whole operation. Child
/// metadata is probed concurrently, but the output preserves the
/// underlying directory enumeration order. Each entry's
/// `relative_path` equals its `name`.
pub async fn list_dir(path: impl AsRef<Path>) -> Vec<DirEntry> {
    let path = path.as_ref();
    read_entries(path, path).await
}

/// Immediate children of `path` that are directories.
pub async fn list_dirs(path: impl AsRef<Path>) -> Vec<DirEntry> {
    list_dir(path)
        .await
        .into_iter()
        .filter(|entry| entry.is_directory)
        .collect()
}

/// Immediate children of `path` that are regular files.
pub async fn list_files(path: impl AsRef<Path>) -> Vec<DirEntry> {
    list_dir(path)
        .await
        .into_iter()
        .filter(|entry| entry.is_file)
        .collect()
}

/// Children of `dir`, with `relative_path` expressed against `base`.
///
/// Shared by [`list_dir`] (`base == dir`, so relative paths collapse
/// to bare names) and the recursive walker (`base` is the walk root).
pub(crate) async fn read_entries(dir: &Path, base: &Path) -> Vec<DirEntry> {
    let mut reader = match tokio::fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(_) => return Vec::new(),
    };

    let mut children: Vec<(String, PathBuf)> = Vec::new();
    while let Ok(Some(child)) = reader.next_entry().await {
        let name = child.file_name().to_string_lossy().into_owned();
        children.push((name, child.path()));
    }

    stream::iter(children)
        .map(|(name, path)| {
            let relative_path = path
                .strip_prefix(base)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone());
            async move {
                let meta = probe(&path).await;
                DirEntry::new(name, path, relative_path, meta)
            }
        })
        .buffered(MAX_IN_FLIGHT)
        .collect()
        .await
}
