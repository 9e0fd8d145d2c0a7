//! Never-fail path metadata probing.

use std::path::Path;

use serde::Serialize;

/// Classification of a path's metadata.
///
/// Any underlying stat failure -- missing path, permission denial, a
/// component vanishing mid-race -- collapses to [`PathMeta::Absent`],
/// so callers composing bulk tree operations can treat "doesn't
/// exist" and "can't be read" uniformly as "not of this type" rather
/// than as exceptional conditions. Special files that are neither
/// regular files, directories, nor symlinks (FIFOs, sockets) also
/// classify as `Absent`, keeping all three type predicates false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMeta {
    Absent,
    File,
    Directory,
    Symlink,
}

impl PathMeta {
    pub fn is_file(&self) -> bool {
        matches!(self, PathMeta::File)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, PathMeta::Directory)
    }

    pub fn is_symlink(&self) -> bool {
        matches!(self, PathMeta::Symlink)
    }

    /// True for any non-absent classification.
    pub fn exists(&self) -> bool {
        !matches!(self, PathMeta::Absent)
    }
}

/// Query a path's metadata. Never fails.
///
/// Symlinks are not followed: a symlink classifies as
/// [`PathMeta::Symlink`], never as its target's type, so at most one
/// type predicate is ever true.
pub async fn probe(path: impl AsRef<Path>) -> PathMeta {
    match tokio::fs::symlink_metadata(path).await {
        Ok(meta) => {
            let file_type = meta.file_type();
            if file_type.is_symlink() {
                PathMeta::Symlink
            } else if file_type.is_dir() {
                PathMeta::Directory
            } else if file_type.is_file() {
                PathMeta::File
            } else {
                PathMeta::Absent
            }
        }
        Err(_) => PathMeta::Absent,
    }
}

/// True iff the path exists in any form.
pub async fn exists(path: impl AsRef<Path>) -> bool {
    probe(path).await.exists()
}
