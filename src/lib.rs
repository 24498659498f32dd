//! hdrmig is a header migration tool.
//! It walks a directory tree and rewrites C/C++ header files in place,
//! wrapping exported declarations in block comments and stripping
//! trailing line comments from the remaining code.

/// Line classification: blank, preprocessor, declaration and plain lines
pub mod classifier;

/// Command-line interface module for hdrmig
pub mod cli;

/// Configuration handling
/// Supports hdrmig.json, hdrmig.yml and hdrmig.yaml in the root directory
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for hdrmig
pub mod error;

/// Header selection and ignore patterns
/// Processes .hdrmigignore files to exclude specific paths
pub mod ignore;

/// Logger setup
pub mod logger;

/// Directory walk and in-place rewriting of header files
pub mod processor;

/// The two-state line rewriter
pub mod rewriter;
