/*!
 * Configuration handling for projpack
 */

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// How file paths are written in front of each file block
///
/// The style applies to every entry, auxiliary files included: with
/// `Absolute` a root-level `Dockerfile` is written as its full path, with
/// `Relative` as the bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathStyle {
    /// Canonical absolute path (default)
    Absolute,
    /// Path relative to the source directory
    Relative,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::Absolute
    }
}

/// What to do when a selected file cannot be read while writing the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnreadablePolicy {
    /// Fail the whole run (default)
    Abort,
    /// Write a placeholder for the file and continue
    Skip,
}

impl Default for UnreadablePolicy {
    fn default() -> Self {
        Self::Abort
    }
}

/// Command-line arguments for projpack
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projpack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate the source files of a project into a single annotated document",
    long_about = "Collects every file with a selected extension under a directory (honouring .gitignore), renders a tree of the selection and writes all contents into one text file."
)]
pub struct Args {
    /// Source directory to compile
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name
    #[clap(default_value = "project.compiled.txt")]
    pub output_file: String,

    /// Comma-separated list of file extensions to include (without the dot)
    #[clap(short, long, value_delimiter = ',', required_unless_present = "generate")]
    pub extensions: Vec<String>,

    /// Do not read the root .gitignore file
    #[clap(long)]
    pub no_gitignore: bool,

    /// Path to an alternate ignore file, anchored at the source directory
    #[clap(long)]
    pub gitignore_path: Option<String>,

    /// Comma-separated list of extra gitignore-style patterns
    #[clap(long = "ignore", value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Write paths relative to the source directory
    #[clap(long)]
    pub relative_paths: bool,

    /// Write a placeholder for unreadable files instead of failing
    #[clap(long)]
    pub skip_unreadable: bool,

    /// Print a table of the written files
    #[clap(long)]
    pub report: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Selection configuration for one run
#[derive(Clone, Debug)]
pub struct Config {
    /// Source directory to walk
    pub target_dir: PathBuf,

    /// Output document path
    pub output_file: PathBuf,

    /// Accepted extensions, stored without a leading dot
    pub extensions: BTreeSet<String>,

    /// Whether to read the ignore file at the root
    pub respect_gitignore: bool,

    /// Alternate ignore file (defaults to `<root>/.gitignore`)
    pub gitignore_path: Option<PathBuf>,

    /// Extra ignore rules, evaluated after the ignore file
    pub extra_ignore: Vec<String>,

    /// How paths are written in the document
    pub path_style: PathStyle,

    /// Policy for source files that cannot be read
    pub unreadable: UnreadablePolicy,
}

impl Config {
    /// Create a configuration with default options
    pub fn new<I, S>(target_dir: impl Into<PathBuf>, extensions: I, output_file: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            target_dir: target_dir.into(),
            output_file: output_file.into(),
            extensions: normalize_extensions(extensions),
            respect_gitignore: true,
            gitignore_path: None,
            extra_ignore: Vec::new(),
            path_style: PathStyle::default(),
            unreadable: UnreadablePolicy::default(),
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self::new(&args.directory_path, &args.extensions, &args.output_file)
            .with_gitignore(!args.no_gitignore)
            .with_gitignore_path(args.gitignore_path.map(PathBuf::from))
            .with_extra_ignore(args.ignore_patterns)
            .with_path_style(if args.relative_paths {
                PathStyle::Relative
            } else {
                PathStyle::Absolute
            })
            .with_unreadable(if args.skip_unreadable {
                UnreadablePolicy::Skip
            } else {
                UnreadablePolicy::Abort
            })
    }

    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    pub fn with_gitignore_path(mut self, path: Option<PathBuf>) -> Self {
        self.gitignore_path = path;
        self
    }

    pub fn with_extra_ignore(mut self, patterns: Vec<String>) -> Self {
        self.extra_ignore = patterns;
        self
    }

    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    pub fn with_unreadable(mut self, policy: UnreadablePolicy) -> Self {
        self.unreadable = policy;
        self
    }

    /// Ignore file to load, if any
    pub fn ignore_file(&self) -> Option<PathBuf> {
        if !self.respect_gitignore {
            return None;
        }
        Some(match &self.gitignore_path {
            Some(path) => path.clone(),
            None => self.target_dir.join(crate::utils::GITIGNORE_FILE),
        })
    }

    /// Validate the configuration
    ///
    /// The source directory itself is checked when the walk starts, so an
    /// unreadable root is reported as such rather than as a config error.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.extensions.is_empty(),
            InvalidArgument,
            "At least one file extension is required"
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            self.output_file.file_name().is_some(),
            InvalidArgument,
            "Output path has no file name: {}",
            self.output_file.display()
        );

        // Check if custom gitignore file exists
        if self.respect_gitignore {
            if let Some(path) = &self.gitignore_path {
                ensure!(
                    path.is_file(),
                    Config,
                    "Custom .gitignore file not found: {}",
                    path.display()
                );
            }
        }

        Ok(())
    }
}

/// Strip leading dots and drop empty entries
fn normalize_extensions<I, S>(extensions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}
