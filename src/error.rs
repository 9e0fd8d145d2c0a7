//! Error taxonomy for tree operations.
//!
//! Only mutations (unlink, rmdir, mkdir, rename, copy, read, write)
//! produce errors. Traversal-time failures -- stat or directory
//! listing calls that lose a race or hit a permission wall -- are
//! degraded to absent/empty results by the probing and listing layers
//! and never surface here.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Error from a mutating tree operation.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The target path does not exist where existence is required
    /// (remove without the ignore flag, rename or copy of a missing
    /// source).
    #[error("path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// An OS call failed for a reason other than absence. Aborts the
    /// remaining steps of the enclosing bulk operation; entries
    /// already mutated stay mutated.
    #[error("{op} failed for {}: {source}", path.display())]
    Io {
        /// Which operation failed ("unlink", "rmdir", "copy", ...).
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    pub(crate) fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_the_path() {
        let err = TreeError::not_found(Path::new("/some/missing/dir"));
        assert_eq!(err.to_string(), "path does not exist: /some/missing/dir");
    }

    #[test]
    fn test_io_display_names_op_and_path() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let err = TreeError::io("rmdir", Path::new("/locked"), source);
        let msg = err.to_string();
        assert!(msg.starts_with("rmdir failed for /locked:"));
    }
}
