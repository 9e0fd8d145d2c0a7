//! Ordered subtree removal.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TreeError};
use crate::probe::{probe, PathMeta};
use crate::util::try_join_bounded;
use crate::walk::walk;

/// Options for [`remove_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOptions {
    /// Treat a missing target as success instead of failing with
    /// [`TreeError::NotFound`].
    pub ignore_missing: bool,
}

/// Remove a file or an entire directory subtree.
///
/// A missing target fails with [`TreeError::NotFound`]; use
/// [`remove_with`] to tolerate it.
pub async fn remove(path: impl AsRef<Path>) -> Result<()> {
    remove_with(path, RemoveOptions::default()).await
}

/// Remove a file or an entire directory subtree, with explicit
/// missing-target handling.
///
/// Files within a subtree are unlinked concurrently -- they have no
/// structural dependency on each other. Directories are then removed
/// strictly deepest-first, one at a time, so the underlying
/// remove-empty-directory call never observes a non-empty directory.
/// Any single deletion failure propagates and aborts the remaining
/// sequential removals; entries already deleted stay deleted.
pub async fn remove_with(path: impl AsRef<Path>, options: RemoveOptions) -> Result<()> {
    let path = path.as_ref();
    match probe(path).await {
        PathMeta::Absent => {
            if options.ignore_missing {
                Ok(())
            } else {
                Err(TreeError::not_found(path))
            }
        }
        PathMeta::File | PathMeta::Symlink => unlink(path).await,
        PathMeta::Directory => remove_tree(path).await,
    }
}

async fn unlink(path: &Path) -> Result<()> {
    tokio::fs::remove_file(path)
        .await
        .map_err(|e| TreeError::io("unlink", path, e))
}

async fn remove_empty_dir(path: &Path) -> Result<()> {
    tokio::fs::remove_dir(path)
        .await
        .map_err(|e| TreeError::io("rmdir", path, e))
}

async fn remove_tree(path: &Path) -> Result<()> {
    let entries = walk(path).await;
    if entries.is_empty() {
        return remove_empty_dir(path).await;
    }

    let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_directory);
    debug!(
        files = files.len(),
        dirs = dirs.len(),
        path = %path.display(),
        "removing subtree"
    );

    // Everything that is not a directory (files, symlinks, entries
    // whose metadata vanished) gets unlinked; order is unconstrained.
    let unlinks: Vec<_> = files
        .into_iter()
        .map(|entry| async move { unlink(&entry.path).await })
        .collect();
    if let Err(e) = try_join_bounded(unlinks).await {
        warn!(error = %e, "subtree removal aborted during file deletion");
        return Err(e);
    }

    // Deepest directories first, so every directory is empty by the
    // time its own removal is attempted. Depth is the segment count
    // from the filesystem root, used purely as a sort key.
    let mut dirs: Vec<PathBuf> = dirs.into_iter().map(|e| e.path).collect();
    dirs.sort_by_key(|dir| Reverse(dir.components().count()));

    for dir in &dirs {
        if let Err(e) = remove_empty_dir(dir).await {
            warn!(error = %e, "subtree removal aborted during directory deletion");
            return Err(e);
        }
    }

    remove_empty_dir(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::exists;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_remove_plain_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        std::fs::write(&file, b"a").unwrap();

        remove(&file).await.unwrap();
        assert!(!exists(&file).await);
    }

    #[tokio::test]
    async fn test_remove_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("empty");
        std::fs::create_dir(&dir).unwrap();

        remove(&dir).await.unwrap();
        assert!(!exists(&dir).await);
    }

    #[tokio::test]
    async fn test_remove_nested_tree() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("root");
        std::fs::create_dir_all(root.join("a/b/c")).unwrap();
        std::fs::write(root.join("top.txt"), b"1").unwrap();
        std::fs::write(root.join("a/mid.txt"), b"2").unwrap();
        std::fs::write(root.join("a/b/low.txt"), b"3").unwrap();
        std::fs::write(root.join("a/b/c/deep.txt"), b"4").unwrap();
        std::fs::create_dir(root.join("a/empty")).unwrap();

        // A non-empty rmdir would fail at the OS level, so success
        // here exercises the deepest-first ordering.
        remove(&root).await.unwrap();
        assert!(!exists(&root).await);
    }

    #[tokio::test]
    async fn test_remove_missing_path_fails() {
        let tmp = TempDir::new().unwrap();
        let err = remove(tmp.path().join("ghost")).await.unwrap_err();
        assert!(matches!(err, TreeError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_missing_path_ignored_on_request() {
        let tmp = TempDir::new().unwrap();
        remove_with(
            tmp.path().join("ghost"),
            RemoveOptions {
                ignore_missing: true,
            },
        )
        .await
        .unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_remove_unlinks_symlinks_without_following() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("root");
        let outside = tmp.path().join("outside.txt");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(&outside, b"keep me").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        remove(&root).await.unwrap();
        assert!(!exists(&root).await);
        // The symlink target survives.
        assert!(outside.exists());
    }

    #[tokio::test]
    async fn test_remove_wide_tree() {
        // More files than the fan-out bound, to push deletions
        // through several batches.
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("wide");
        for d in 0..4 {
            let dir = root.join(format!("d{d}"));
            std::fs::create_dir_all(&dir).unwrap();
            for f in 0..20 {
                std::fs::write(dir.join(format!("f{f}.txt")), b"x").unwrap();
            }
        }

        remove(&root).await.unwrap();
        assert!(!exists(&root).await);
    }
}
