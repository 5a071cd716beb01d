/*!
 * Gitignore-style pattern matching
 *
 * Rules are compiled with the `ignore` crate's gitignore builder, so globbing,
 * negation, directory-only markers and anchoring behave exactly like git.
 * Rules are evaluated in order and the last matching rule wins.
 */

use std::fs;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::debug;

use crate::config::Config;
use crate::error::{ProjPackError, Result};

/// A compiled, ordered set of ignore rules anchored at a root directory
#[derive(Debug, Clone)]
pub struct PatternSpec {
    gitignore: Gitignore,
}

impl PatternSpec {
    /// Compile gitignore text whose rules are anchored at `root`
    ///
    /// Comment and blank lines are skipped. A malformed glob fails the whole
    /// compilation with [`ProjPackError::IgnoreParse`].
    pub fn compile(root: &Path, text: &str) -> Result<Self> {
        Self::compile_lines(root, None, text.lines())
    }

    /// Load the ignore rules selected by `config`
    ///
    /// Returns `Ok(None)` when gitignore handling is disabled or when there is
    /// no ignore file and no extra rules; in that case nothing is ignored.
    pub fn load(config: &Config) -> Result<Option<Self>> {
        let text = match config.ignore_file() {
            Some(path) if path.is_file() => {
                debug!("Loading ignore rules from {}", path.display());
                Some((fs::read_to_string(&path)?, path))
            }
            _ => None,
        };

        if text.is_none() && config.extra_ignore.is_empty() {
            return Ok(None);
        }

        let (file_lines, source) = match &text {
            Some((content, path)) => (content.as_str(), Some(path.clone())),
            None => ("", None),
        };
        let lines = file_lines
            .lines()
            .chain(config.extra_ignore.iter().map(String::as_str));

        Self::compile_lines(&config.target_dir, source, lines).map(Some)
    }

    fn compile_lines<'a>(
        root: &Path,
        source: Option<PathBuf>,
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<Self> {
        let label = source
            .clone()
            .unwrap_or_else(|| root.join(crate::utils::GITIGNORE_FILE));
        let parse_error = |err| ProjPackError::IgnoreParse {
            path: label.clone(),
            source: err,
        };

        let mut builder = GitignoreBuilder::new(root);
        for line in lines {
            builder
                .add_line(source.clone(), line)
                .map_err(parse_error)?;
        }
        let gitignore = builder.build().map_err(parse_error)?;
        debug!("Compiled {} ignore rules", gitignore.num_ignores() + gitignore.num_whitelists());

        Ok(Self { gitignore })
    }

    /// Check whether a root-relative path is ignored
    ///
    /// A path is also ignored when one of its parent directories is, which
    /// mirrors git: a file cannot be re-included below an excluded directory.
    pub fn matches(&self, relative_path: &Path, is_dir: bool) -> bool {
        if relative_path.as_os_str().is_empty() {
            return false;
        }
        self.gitignore
            .matched_path_or_any_parents(relative_path, is_dir)
            .is_ignore()
    }
}

/// Evaluate an optional spec; an absent spec ignores nothing
pub fn is_ignored(spec: Option<&PatternSpec>, relative_path: &Path, is_dir: bool) -> bool {
    spec.map_or(false, |spec| spec.matches(relative_path, is_dir))
}
