/*!
 * Reporting functionality for projpack
 *
 * Renders the files written into the document as a table using the tabled
 * library.
 */

use std::path::PathBuf;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Information about a written file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Path relative to the source directory
    pub path: PathBuf,
    /// Number of lines in the file
    pub lines: usize,
    /// Number of bytes written for the file
    pub bytes: u64,
}

/// Statistics collected while writing the document
#[derive(Debug, Clone, Default)]
pub struct WriteSummary {
    /// Number of files written
    pub files_written: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of bytes of file content
    pub total_bytes: u64,
    /// Details for each file, in document order
    pub files: Vec<FileReportInfo>,
}

impl WriteSummary {
    /// Add one written file to the totals
    pub fn record(&mut self, info: FileReportInfo) {
        self.files_written += 1;
        self.total_lines += info.lines;
        self.total_bytes += info.bytes;
        self.files.push(info);
    }
}

/// Report generator for written documents
pub struct Reporter;

impl Reporter {
    /// Format a number with human-readable units
    fn format_number(num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate the report table for a summary
    pub fn generate_report(summary: &WriteSummary) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        let mut rows: Vec<FileRow> = summary
            .files
            .iter()
            .map(|info| FileRow {
                path: info.path.display().to_string(),
                lines: Self::format_number(info.lines),
                size: format_file_size(info.bytes),
            })
            .collect();

        rows.push(FileRow {
            path: format!("Total ({} files)", summary.files_written),
            lines: Self::format_number(summary.total_lines),
            size: format_file_size(summary.total_bytes),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    /// Print the report to stdout
    pub fn print_report(summary: &WriteSummary) {
        println!("{}", Self::generate_report(summary));
    }
}
