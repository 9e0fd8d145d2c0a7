//! Subtree copying.

use std::path::Path;

use tracing::debug;

use crate::ensure::ensure_dir;
use crate::error::{Result, TreeError};
use crate::probe::{probe, PathMeta};
use crate::remove::{remove_with, RemoveOptions};
use crate::util::try_join_bounded;
use crate::walk::walk;

/// Options for [`copy_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOptions {
    /// Remove any existing destination subtree before copying, so the
    /// destination ends up mirroring the source instead of merging
    /// into whatever was already there.
    pub overwrite: bool,
}

/// Copy a file or directory subtree to `dest`, the final destination
/// path.
///
/// Directory copies are additive: files already present under `dest`
/// but absent from `src` are left untouched. Use [`copy_with`] and
/// `overwrite` to mirror instead.
pub async fn copy(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    copy_with(src, dest, CopyOptions::default()).await
}

/// Copy a file or directory subtree to `dest` with explicit overwrite
/// handling.
///
/// Per-file copies run concurrently with no ordering guarantee;
/// destination parent directories are ensured per file, which is safe
/// under the fan-out because directory creation is idempotent. Any
/// single copy failure propagates and aborts the operation; files
/// already copied remain in place.
pub async fn copy_with(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    options: CopyOptions,
) -> Result<()> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    match probe(src).await {
        PathMeta::Absent => Err(TreeError::not_found(src)),
        PathMeta::File | PathMeta::Symlink => copy_file(src, dest).await,
        PathMeta::Directory => copy_tree(src, dest, options).await,
    }
}

/// Byte-for-byte single-file copy, ensuring the destination's parent
/// directory first.
async fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_dir(parent).await?;
    }
    tokio::fs::copy(src, dest)
        .await
        .map(|_| ())
        .map_err(|e| TreeError::io("copy", src, e))
}

async fn copy_tree(src: &Path, dest: &Path, options: CopyOptions) -> Result<()> {
    if options.overwrite {
        remove_with(
            dest,
            RemoveOptions {
                ignore_missing: true,
            },
        )
        .await?;
    }

    let files: Vec<_> = walk(src).await.into_iter().filter(|e| e.is_file).collect();
    debug!(
        files = files.len(),
        src = %src.display(),
        dest = %dest.display(),
        "copying subtree"
    );

    let copies: Vec<_> = files
        .into_iter()
        .map(|entry| {
            let target = dest.join(&entry.relative_path);
            async move { copy_file(&entry.path, &target).await }
        })
        .collect();
    try_join_bounded(copies).await
}
