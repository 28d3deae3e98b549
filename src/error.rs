//! Global error handling for treedump
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for treedump operations
#[derive(Error, Debug)]
pub enum TreeDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for treedump operations
pub type Result<T> = std::result::Result<T, TreeDumpError>;

/// Creates a TreeDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TreeDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            TreeDumpError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

// Allow converting TreeDumpError to io::Error so tests returning io::Result
// can use `?` on crate results
impl From<TreeDumpError> for io::Error {
    fn from(err: TreeDumpError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
