//! Asynchronous filesystem tree operations.
//!
//! Lists, walks, copies, and removes whole subtrees on top of
//! `tokio::fs`, with two load-bearing guarantees:
//!
//! - Tolerant traversal: stat and listing failures degrade to
//!   absent/empty results, so bulk operations survive branches that
//!   vanish mid-walk instead of aborting on them.
//! - Ordered mutation: file deletions and copies fan out concurrently
//!   under a bounded limit, while directory removal is strictly
//!   sequential and deepest-first, so the OS never observes a remove
//!   of a non-empty directory.
//!
//! Mutation failures (unlink, rmdir, mkdir, rename, copy) surface as
//! [`TreeError`] and abort the enclosing operation without rollback.

mod copy;
mod ensure;
mod entry;
mod error;
mod listing;
mod ops;
mod probe;
mod remove;
mod util;
mod walk;

pub use copy::{copy, copy_with, CopyOptions};
pub use ensure::ensure_dir;
pub use entry::DirEntry;
pub use error::{Result, TreeError};
pub use listing::{list_dir, list_dirs, list_files};
pub use ops::{read_file, read_file_bytes, rename, write_file};
pub use probe::{exists, probe, PathMeta};
pub use remove::{remove, remove_with, RemoveOptions};
pub use walk::walk;
