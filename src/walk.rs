//! Recursive descendant enumeration.

use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::entry::DirEntry;
use crate::listing::read_entries;

/// Enumerate every descendant of `root`, files and directories alike,
/// with `relative_path` expressed relative to `root`.
///
/// Ordering invariant: a directory's full child list appears before
/// any child subtree's expansion, and subtrees are expanded in the
/// order their directories were listed. Consequently every
/// directory's entry precedes the entries of its own descendants.
///
/// A missing root, or a subdirectory that vanishes mid-walk, expands
/// to nothing instead of aborting the walk.
pub async fn walk(root: impl AsRef<Path>) -> Vec<DirEntry> {
    let root = root.as_ref().to_path_buf();
    dive(root.clone(), root).await
}

fn dive(root: PathBuf, dir: PathBuf) -> BoxFuture<'static, Vec<DirEntry>> {
    async move {
        let children = read_entries(&dir, &root).await;
        let subdirs: Vec<PathBuf> = children
            .iter()
            .filter(|child| child.is_directory)
            .map(|child| child.path.clone())
            .collect();

        // Siblings first, then each subtree in listed order.
        let mut entries = children;
        for subdir in subdirs {
            entries.extend(dive(root.clone(), subdir).await);
        }
        entries
    }
    .boxed()
}
