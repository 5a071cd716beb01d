/*!
 * Utility functions and fixed selection rules for projpack
 */

/// Path substrings that exclude a directory or file wherever they occur
pub const EXCLUDED_PATH_SUBSTRINGS: [&str; 2] = ["charting_library", "datafeed"];

/// Lockfiles that are never collected, matched against the exact file name
pub const LOCKFILE_NAMES: [&str; 2] = ["package-lock.json", "yarn.lock"];

/// Root-level files considered after the walk regardless of extension, in output order
pub const AUXILIARY_FILES: [&str; 2] = ["Dockerfile", "docker-compose.yml"];

/// Name of the ignore file looked up at the root
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Check whether a path string contains one of the excluded substrings
pub fn contains_excluded_substring(path: &str) -> bool {
    EXCLUDED_PATH_SUBSTRINGS
        .iter()
        .any(|needle| path.contains(needle))
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
