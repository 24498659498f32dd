//! Glob handling for header selection and ignored paths.
//! Ignore patterns come from the `.hdrmigignore` file in the root directory,
//! similar to .gitignore, and from the command line.

use crate::error::{MigrationError, MigrationResult};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Reads the ignore file and returns its patterns.
///
/// # Notes
/// - If the file doesn't exist, returns no patterns
/// - Each non-empty line not starting with `#` is one glob pattern
///
/// # Example
/// ```ignore
/// # Contents of .hdrmigignore:
/// third_party/**
/// **/generated_*.h
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> MigrationResult<Vec<String>> {
    let ignore_path = ignore_path.as_ref();
    if !ignore_path.exists() {
        debug!("{} does not exist", ignore_path.display());
        return Ok(Vec::new());
    }

    let contents = read_to_string(ignore_path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Compiles glob patterns into a single set.
///
/// # Errors
/// * `MigrationError::PatternError` if any pattern is invalid
pub fn build_glob_set<S: AsRef<str>>(patterns: &[S]) -> MigrationResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        builder.add(Glob::new(pattern).map_err(|e| {
            MigrationError::PatternError(format!("invalid glob '{}': {}", pattern, e))
        })?);
    }
    builder
        .build()
        .map_err(|e| MigrationError::PatternError(e.to_string()))
}
