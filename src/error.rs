//! Error handling for hdrmig.
//! Defines the error type and result alias used throughout the migration.

use std::io;
use thiserror::Error;

/// Errors that can abort a migration run.
///
/// Every variant is fatal: the driver stops at the first error and no
/// further files are touched.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// A header file could not be read or written
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A directory entry could not be read during the walk
    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    /// An invalid glob or declaration marker
    #[error("Pattern error: {0}")]
    PatternError(String),

    /// A configuration file that exists but cannot be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A declaration opened a block comment that no `;` ever closed
    #[error("Unterminated declaration in '{path}' starting at line {line}")]
    UnterminatedDeclaration { path: String, line: usize },
}

/// Convenience type alias for Results with MigrationError as the error type.
pub type MigrationResult<T> = Result<T, MigrationError>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: MigrationError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
