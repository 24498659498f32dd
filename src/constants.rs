//! Common constants used throughout hdrmig.

/// Declaration markers recognised when none are configured
pub const DEFAULT_MARKERS: [&str; 2] = ["NNG_DECL", "NN_DECL"];

/// Header file globs used when none are configured
pub const DEFAULT_PATTERNS: [&str; 1] = ["**/*.h"];

/// Supported configuration file names, looked up in the root directory
pub const CONFIG_FILES: [&str; 3] = ["hdrmig.json", "hdrmig.yml", "hdrmig.yaml"];

/// Ignore file name, looked up in the root directory
pub const IGNORE_FILE: &str = ".hdrmigignore";
