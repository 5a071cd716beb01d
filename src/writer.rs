/*!
 * Document writer for projpack
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::config::{Config, UnreadablePolicy};
use crate::error::{ProjPackError, Result};
use crate::progress::{Progress, ProgressReporter};
use crate::report::{FileReportInfo, WriteSummary};
use crate::types::FileEntry;

/// Heading line of the document
pub const TREE_HEADER: &str = "PROJECT TREE:";

/// Line separating the tree from the file blocks
pub const SEPARATOR: &str = "==================================================";

/// Fence written after the path and after the contents of each file
pub const FENCE: &str = "```";

/// Writes the tree and file contents into the output document
pub struct DocumentWriter {
    /// Writer configuration
    config: Config,
}

impl DocumentWriter {
    /// Create a new document writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the document, reporting progress after every file
    ///
    /// When writing fails after the output file was created, the partial file
    /// is removed before the error is returned.
    pub fn write<P>(&self, entries: &[FileEntry], tree: &str, progress: &mut P) -> Result<WriteSummary>
    where
        P: ProgressReporter + ?Sized,
    {
        let output = &self.config.output_file;
        let file = File::create(output).map_err(|source| ProjPackError::OutputUnwritable {
            path: output.clone(),
            source,
        })?;
        debug!("Writing {} files to {}", entries.len(), output.display());

        let result = self.write_document(BufWriter::new(file), entries, tree, progress);
        if result.is_err() {
            if let Err(e) = fs::remove_file(output) {
                warn!("Failed to remove partial output {}: {}", output.display(), e);
            }
        }
        result
    }

    fn write_document<W, P>(
        &self,
        mut out: W,
        entries: &[FileEntry],
        tree: &str,
        progress: &mut P,
    ) -> Result<WriteSummary>
    where
        W: Write,
        P: ProgressReporter + ?Sized,
    {
        let output = self.config.output_file.clone();
        let write_error = |source| ProjPackError::OutputUnwritable {
            path: output.clone(),
            source,
        };

        write!(out, "{}\n{}\n\n{}\n\n", TREE_HEADER, tree, SEPARATOR).map_err(write_error)?;

        let mut summary = WriteSummary::default();
        let mut counter = Progress::new(entries.len());

        for entry in entries {
            let content = self.read_content(&entry.path)?;
            let header = entry.display_path(self.config.path_style);

            write!(out, "{}{}\n{}\n{}\n", header.display(), FENCE, content, FENCE)
                .map_err(write_error)?;

            summary.record(FileReportInfo {
                path: entry.relative_path.clone(),
                lines: content.lines().count(),
                bytes: content.len() as u64,
            });
            progress.report(counter.advance());
        }

        if entries.is_empty() {
            progress.report(counter.percentage());
        }

        out.flush().map_err(write_error)?;
        Ok(summary)
    }

    /// Read a source file, decoding invalid UTF-8 lossily
    fn read_content(&self, path: &Path) -> Result<String> {
        match fs::read(path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(source) => match self.config.unreadable {
                UnreadablePolicy::Abort => Err(ProjPackError::SourceRead {
                    path: path.to_path_buf(),
                    source,
                }),
                UnreadablePolicy::Skip => {
                    warn!("Skipping unreadable file {}: {}", path.display(), source);
                    Ok(unreadable_placeholder(path, &source))
                }
            },
        }
    }
}

/// Text written in place of a file that could not be read
pub fn unreadable_placeholder(path: &Path, error: &std::io::Error) -> String {
    format!("[unreadable file {}: {}]", path.display(), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathStyle;
    use crate::types::EntrySource;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn entry(root: &Path, rel: &str) -> FileEntry {
        FileEntry::new(root.join(rel), PathBuf::from(rel), EntrySource::Walk)
    }

    #[test]
    fn test_document_layout() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.txt"), "beta\n").unwrap();
        let output = dir.path().join("out.txt");

        let config = Config::new(dir.path(), ["txt"], &output).with_path_style(PathStyle::Relative);
        let entries = vec![entry(dir.path(), "a.txt"), entry(dir.path(), "b.txt")];
        let mut seen = Vec::new();
        let summary = DocumentWriter::new(config)
            .write(&entries, "proj/\n├── a.txt\n└── b.txt", &mut |p: u8| seen.push(p))
            .unwrap();

        let expected = format!(
            "PROJECT TREE:\nproj/\n├── a.txt\n└── b.txt\n\n{}\n\na.txt```\nalpha\n```\nb.txt```\nbeta\n\n```\n",
            "=".repeat(50)
        );
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
        assert_eq!(seen, vec![50, 100]);
        assert_eq!(summary.files_written, 2);
        assert_eq!(summary.total_bytes, 10);
    }

    #[test]
    fn test_empty_selection_reports_once() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let config = Config::new(dir.path(), ["txt"], &output);

        let mut seen = Vec::new();
        DocumentWriter::new(config)
            .write(&[], "proj/", &mut |p: u8| seen.push(p))
            .unwrap();

        assert_eq!(seen, vec![100]);
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.ends_with(&format!("{}\n\n", SEPARATOR)));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bin.txt"), [b'o', b'k', 0xff, b'!']).unwrap();
        let output = dir.path().join("out.txt");
        let config = Config::new(dir.path(), ["txt"], &output);

        DocumentWriter::new(config)
            .write(&[entry(dir.path(), "bin.txt")], "proj/", &mut crate::progress::NoProgress)
            .unwrap();

        assert!(fs::read_to_string(&output).unwrap().contains("ok\u{FFFD}!"));
    }

    #[test]
    fn test_unreadable_file_aborts_and_removes_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let config = Config::new(dir.path(), ["txt"], &output);

        let err = DocumentWriter::new(config)
            .write(&[entry(dir.path(), "gone.txt")], "proj/", &mut crate::progress::NoProgress)
            .unwrap_err();

        assert!(matches!(err, ProjPackError::SourceRead { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_unreadable_file_skipped_with_placeholder() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("here.txt"), "here").unwrap();
        let output = dir.path().join("out.txt");
        let config = Config::new(dir.path(), ["txt"], &output).with_unreadable(UnreadablePolicy::Skip);

        let entries = vec![entry(dir.path(), "gone.txt"), entry(dir.path(), "here.txt")];
        let mut seen = Vec::new();
        DocumentWriter::new(config)
            .write(&entries, "proj/", &mut |p: u8| seen.push(p))
            .unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("[unreadable file"));
        assert!(content.contains("here\n```\n"));
        assert_eq!(seen, vec![50, 100]);
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("missing").join("out.txt");
        let config = Config::new(dir.path(), ["txt"], &output);

        let err = DocumentWriter::new(config)
            .write(&[], "proj/", &mut crate::progress::NoProgress)
            .unwrap_err();
        assert!(matches!(err, ProjPackError::OutputUnwritable { .. }));
    }
}
