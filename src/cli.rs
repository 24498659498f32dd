//! Command-line interface implementation for hdrmig.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for hdrmig.
///
/// Every argument is optional: running without any walks the current
/// directory with the built-in markers and header patterns.
#[derive(Parser, Debug)]
#[command(author, version, about = "hdrmig: comment out exported declarations in C/C++ headers", long_about = None)]
pub struct Args {
    /// Root directory to walk for header files
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Declaration marker that opens a statement to comment out (repeatable)
    #[arg(short = 'm', long = "marker", value_name = "NAME")]
    pub markers: Vec<String>,

    /// Glob selecting header files, relative to ROOT (repeatable)
    #[arg(short = 'p', long = "pattern", value_name = "GLOB")]
    pub patterns: Vec<String>,

    /// Glob selecting paths to skip, relative to ROOT (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Report files that would change without writing them.
    /// Exits with status 1 if any file would change.
    #[arg(short, long)]
    pub check: bool,

    /// Treat a declaration left without a closing `;` at end of file as an error
    /// instead of writing an unbalanced block comment.
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
