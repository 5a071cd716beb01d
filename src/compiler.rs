/*!
 * End-to-end pipeline: collect, render the tree, write the document
 */

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::report::WriteSummary;
use crate::scanner::Scanner;
use crate::tree;
use crate::writer::DocumentWriter;

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    /// Path of the written document
    pub output_file: PathBuf,
    /// Statistics gathered while writing
    pub summary: WriteSummary,
}

/// Compile the files selected by `config` into its output file
///
/// The selection is fully collected before anything is written, so a
/// selection error (bad ignore rule, unreadable root) leaves no output behind.
pub fn compile<P>(config: &Config, progress: &mut P) -> Result<CompileOutcome>
where
    P: ProgressReporter + ?Sized,
{
    config.validate()?;

    let scanner = Scanner::new(config.clone());
    let root = scanner.root()?;
    let entries = scanner.collect()?;
    info!("Selected {} files under {}", entries.len(), root.display());

    let tree = tree::render(&entries, &tree::root_name(&root));
    debug!("Rendered tree with {} lines", tree.lines().count());

    let summary = DocumentWriter::new(config.clone()).write(&entries, &tree, progress)?;
    info!("Wrote {}", config.output_file.display());

    Ok(CompileOutcome {
        output_file: config.output_file.clone(),
        summary,
    })
}

/// Compile `root_dir` into `output_file` using default options
///
/// Returns the output path on success.
pub fn run<I, S, F>(root_dir: &Path, extensions: I, output_file: &Path, mut on_progress: F) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(u8),
{
    let config = Config::new(root_dir, extensions, output_file);
    compile(&config, &mut on_progress).map(|outcome| outcome.output_file)
}
