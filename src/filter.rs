/*!
 * Exclusion decisions applied while walking the source directory
 */

use std::collections::BTreeSet;
use std::path::Path;

use log::trace;

use crate::matcher::{is_ignored, PatternSpec};
use crate::utils::{contains_excluded_substring, LOCKFILE_NAMES};

/// Decides which directories are pruned and which files are kept
#[derive(Debug, Clone)]
pub struct TraversalFilter {
    spec: Option<PatternSpec>,
    extensions: BTreeSet<String>,
}

impl TraversalFilter {
    /// Create a filter from compiled ignore rules and accepted extensions
    pub fn new(spec: Option<PatternSpec>, extensions: BTreeSet<String>) -> Self {
        Self { spec, extensions }
    }

    /// Ignore rules backing this filter, if any
    pub fn spec(&self) -> Option<&PatternSpec> {
        self.spec.as_ref()
    }

    /// Check whether a directory (relative to the root) should not be entered
    pub fn should_skip_directory(&self, relative_path: &Path) -> bool {
        let path_str = relative_path.to_string_lossy();

        if contains_excluded_substring(&path_str) {
            trace!("Skipping excluded directory: {}", path_str);
            return true;
        }

        if is_ignored(self.spec(), relative_path, true) {
            trace!("Skipping ignored directory: {}", path_str);
            return true;
        }

        false
    }

    /// Check whether a file (relative to the root) belongs in the selection
    pub fn should_include_file(&self, relative_path: &Path) -> bool {
        let path_str = relative_path.to_string_lossy();

        if contains_excluded_substring(&path_str) || is_ignored(self.spec(), relative_path, false) {
            trace!("Excluding file: {}", path_str);
            return false;
        }

        let file_name = relative_path.file_name().unwrap_or_default().to_string_lossy();

        if LOCKFILE_NAMES.iter().any(|&lock| lock == file_name) {
            trace!("Excluding lockfile: {}", path_str);
            return false;
        }

        has_extension(&file_name, &self.extensions)
    }

    /// Check an auxiliary root-level file; only the ignore rules apply
    pub fn should_include_auxiliary(&self, relative_path: &Path) -> bool {
        !is_ignored(self.spec(), relative_path, false)
    }
}

/// Suffix check of `name` against `.` + each accepted extension
pub fn has_extension(name: &str, extensions: &BTreeSet<String>) -> bool {
    extensions.iter().any(|ext| {
        name.len() > ext.len()
            && name.ends_with(ext.as_str())
            && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
    })
}
