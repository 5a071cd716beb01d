/*!
 * Directory walking and file collection
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{ProjPackError, Result};
use crate::filter::TraversalFilter;
use crate::matcher::PatternSpec;
use crate::types::{EntrySource, FileEntry};
use crate::utils::AUXILIARY_FILES;

/// Collector for the files selected by a [`Config`]
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Absolute path of the source directory
    pub fn root(&self) -> Result<PathBuf> {
        fs::canonicalize(&self.config.target_dir).map_err(|source| ProjPackError::RootUnreadable {
            path: self.config.target_dir.clone(),
            source,
        })
    }

    /// Walk the source directory and return the selected files in order
    ///
    /// Walked files come first, in the order the file system lists them,
    /// followed by the auxiliary root-level files in their fixed order.
    pub fn collect(&self) -> Result<Vec<FileEntry>> {
        let root = self.root()?;
        fs::read_dir(&root).map_err(|source| ProjPackError::RootUnreadable {
            path: root.clone(),
            source,
        })?;

        let spec = PatternSpec::load(&self.config)?;
        let filter = TraversalFilter::new(spec, self.config.extensions.clone());
        let output = fs::canonicalize(&self.config.output_file).ok();

        debug!("Collecting files under {}", root.display());
        let mut entries = Vec::new();

        let walker = WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !is_pruned(entry, &root, &filter));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            // Links to directories are neither followed nor collected
            if entry.path_is_symlink() && entry.path().is_dir() {
                debug!("Skipping directory symlink: {}", entry.path().display());
                continue;
            }

            let relative_path = relative_to(&root, entry.path());

            // Auxiliary files are handled after the walk
            if entry.depth() == 1 && is_auxiliary(&relative_path) {
                continue;
            }

            // Never pick up a previous run's output
            if output.as_deref() == Some(entry.path()) {
                debug!("Skipping output file: {}", entry.path().display());
                continue;
            }

            if filter.should_include_file(&relative_path) {
                entries.push(FileEntry::new(
                    entry.path().to_path_buf(),
                    relative_path,
                    EntrySource::Walk,
                ));
            }
        }

        for name in AUXILIARY_FILES {
            let path = root.join(name);
            if path.is_file() && filter.should_include_auxiliary(Path::new(name)) {
                entries.push(FileEntry::new(path, PathBuf::from(name), EntrySource::Auxiliary));
            }
        }

        debug!("Collected {} files", entries.len());
        Ok(entries)
    }
}

/// Directories pruned before descending
fn is_pruned(entry: &DirEntry, root: &Path, filter: &TraversalFilter) -> bool {
    entry.file_type().is_dir() && filter.should_skip_directory(&relative_to(root, entry.path()))
}

fn is_auxiliary(relative_path: &Path) -> bool {
    AUXILIARY_FILES
        .iter()
        .any(|name| relative_path == Path::new(name))
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
