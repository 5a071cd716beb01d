/*!
 * projpack - Aggregate a project's source files into one annotated document
 *
 * This library selects files under a directory (by extension, honouring
 * gitignore rules and a few fixed exclusions), renders a tree of the
 * selection and writes every file's contents into a single text document.
 */

pub mod compiler;
pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use compiler::{compile, run, CompileOutcome};
pub use config::{Config, PathStyle, UnreadablePolicy};
pub use error::{ProjPackError, Result};
pub use filter::TraversalFilter;
pub use matcher::PatternSpec;
pub use progress::{NoProgress, ProgressReporter};
pub use report::{FileReportInfo, Reporter, WriteSummary};
pub use scanner::Scanner;
pub use tree::TreeNode;
pub use types::{EntrySource, FileEntry};
pub use writer::DocumentWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
