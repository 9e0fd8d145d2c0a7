//! Idempotent directory-chain creation.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, TreeError};

/// Create every missing component of `path`, root to leaf.
///
/// Each component is created strictly after its parent, and "already
/// exists" counts as success at every step, which makes the call
/// idempotent: repeated invocations, or concurrent invocations with
/// overlapping ancestor paths, all succeed and leave a single
/// directory chain behind. Any other creation failure (permission
/// denial, a file occupying an intermediate component) is surfaced as
/// [`TreeError::Io`].
pub async fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let mut partial = PathBuf::new();
    for component in path.as_ref().components() {
        partial.push(component);
        if !matches!(component, Component::Normal(_)) {
            continue;
        }
        match tokio::fs::create_dir(&partial).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(TreeError::io("mkdir", &partial, e)),
        }
    }
    Ok(())
}
