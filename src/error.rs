//! Global error handling for projpack
//!
//! Every failure the pipeline can surface is represented by [`ProjPackError`].
//! Each variant renders as a single line so callers can show it verbatim.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for projpack operations
#[derive(Error, Debug)]
pub enum ProjPackError {
    /// A rule in the ignore file could not be compiled
    #[error("Invalid ignore pattern in {}: {source}", .path.display())]
    IgnoreParse {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// The root directory cannot be listed
    #[error("Cannot read source directory {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output document cannot be created
    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A selected source file could not be read
    #[error("Cannot read source file {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for projpack operations
pub type Result<T> = std::result::Result<T, ProjPackError>;

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            return Err($crate::error::ProjPackError::$error_type(format!($($arg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(n > 0, InvalidArgument, "expected a positive number, got {}", n);
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(3).unwrap(), 3);
        let err = check_positive(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected a positive number, got -1"
        );
    }

    #[test]
    fn test_messages_are_single_line() {
        let err = ProjPackError::SourceRead {
            path: PathBuf::from("src/main.rs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let message = err.to_string();
        assert_eq!(message, "Cannot read source file src/main.rs: permission denied");
        assert!(!message.contains('\n'));
    }
}
