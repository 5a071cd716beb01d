/*!
 * Core types and data structures for projpack
 */

use std::path::{Path, PathBuf};

use crate::config::PathStyle;

/// Where a selected file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    /// Found by the directory walk
    Walk,
    /// One of the fixed root-level auxiliary files
    Auxiliary,
}

/// A selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the source directory
    pub relative_path: PathBuf,
    /// How the entry was selected
    pub source: EntrySource,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative_path: PathBuf, source: EntrySource) -> Self {
        Self {
            path,
            relative_path,
            source,
        }
    }

    /// Path written in front of the file contents
    pub fn display_path(&self, style: PathStyle) -> &Path {
        match style {
            PathStyle::Absolute => &self.path,
            PathStyle::Relative => &self.relative_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auxiliary_header_follows_path_style() {
        let entry = FileEntry::new(
            PathBuf::from("/work/proj/Dockerfile"),
            PathBuf::from("Dockerfile"),
            EntrySource::Auxiliary,
        );

        assert_eq!(entry.display_path(PathStyle::Relative), Path::new("Dockerfile"));
        assert_eq!(
            entry.display_path(PathStyle::Absolute),
            Path::new("/work/proj/Dockerfile")
        );
    }
}
