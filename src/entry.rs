//! Tree node value type produced by listings and walks.

use std::path::PathBuf;

use serde::Serialize;

use crate::probe::PathMeta;

/// One classified filesystem node discovered during a listing or walk.
///
/// Entries are created fresh per call and never cached; their
/// lifecycle is entirely call-scoped. At most one of the three type
/// flags is true, and all three are false when metadata could not be
/// obtained for the node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    /// Base name of the node.
    pub name: String,

    /// Fully resolved path.
    pub path: PathBuf,

    /// Path relative to the root of the traversal call: equal to
    /// `name` for immediate children, root-relative for recursive
    /// walks.
    pub relative_path: PathBuf,

    pub is_directory: bool,
    pub is_file: bool,
    pub is_symlink: bool,
}

impl DirEntry {
    pub(crate) fn new(name: String, path: PathBuf, relative_path: PathBuf, meta: PathMeta) -> Self {
        Self {
            name,
            path,
            relative_path,
            is_directory: meta.is_dir(),
            is_file: meta.is_file(),
            is_symlink: meta.is_symlink(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_flags_follow_classification() {
        let entry = DirEntry::new(
            "sub".to_string(),
            PathBuf::from("/base/sub"),
            PathBuf::from("sub"),
            PathMeta::Directory,
        );
        assert!(entry.is_directory);
        assert!(!entry.is_file);
        assert!(!entry.is_symlink);

        let absent = DirEntry::new(
            "ghost".to_string(),
            PathBuf::from("/base/ghost"),
            PathBuf::from("ghost"),
            PathMeta::Absent,
        );
        assert!(!absent.is_directory && !absent.is_file && !absent.is_symlink);
    }

    #[test]
    fn test_serializes_camel_case() {
        let entry = DirEntry::new(
            "a.txt".to_string(),
            PathBuf::from("/base/a.txt"),
            PathBuf::from("a.txt"),
            PathMeta::File,
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert_eq!(json["relativePath"], "a.txt");
        assert_eq!(json["isFile"], true);
        assert_eq!(json["isDirectory"], false);
    }
}
