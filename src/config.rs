//! Configuration handling for hdrmig.
//! Settings come from three layers: built-in defaults, an optional config file
//! in the root directory (hdrmig.json, hdrmig.yml, hdrmig.yaml) and the
//! command line. Later layers replace earlier ones key by key.

use crate::cli::Args;
use crate::constants::{CONFIG_FILES, DEFAULT_MARKERS, DEFAULT_PATTERNS, IGNORE_FILE};
use crate::error::{MigrationError, MigrationResult};
use crate::ignore::parse_ignore_file;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub markers: Vec<String>,
    pub patterns: Vec<String>,
    pub ignore: Vec<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub markers: Vec<String>,
    pub patterns: Vec<String>,
    pub ignore: Vec<String>,
    pub check: bool,
    pub strict: bool,
}

/// Reads the first config file found in `root`.
///
/// # Returns
/// * `MigrationResult<Option<String>>` - Contents of the file, or `None` if
///   no config file exists
pub fn load_config<P: AsRef<Path>>(
    root: P,
    config_files: &[&str],
) -> MigrationResult<Option<String>> {
    for file in config_files {
        let config_path = root.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses config file content, trying JSON first and YAML second.
///
/// # Errors
/// * `MigrationError::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> MigrationResult<FileConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| MigrationError::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads and parses the config file of `root`, if any.
pub fn get_config<P: AsRef<Path>>(root: P) -> MigrationResult<FileConfig> {
    match load_config(root, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(FileConfig::default()),
    }
}

fn pick(cli: &[String], file: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if !cli.is_empty() {
        cli.to_vec()
    } else if !file.is_empty() {
        file
    } else {
        defaults.iter().map(|s| s.to_string()).collect()
    }
}

impl Settings {
    /// Merges command line arguments over a config file over the defaults.
    ///
    /// Ignore patterns are additive: the `.hdrmigignore` file, then the config
    /// file, then the command line.
    pub fn resolve(args: &Args, file: FileConfig, ignore_file: Vec<String>) -> Self {
        let mut ignore = ignore_file;
        ignore.extend(file.ignore);
        ignore.extend(args.ignore.iter().cloned());

        Self {
            root: args.root.clone(),
            markers: pick(&args.markers, file.markers, &DEFAULT_MARKERS),
            patterns: pick(&args.patterns, file.patterns, &DEFAULT_PATTERNS),
            ignore,
            check: args.check,
            strict: args.strict,
        }
    }

    /// Reads the config file and ignore file of the root named by `args`
    /// and resolves the settings for the run.
    pub fn from_args(args: &Args) -> MigrationResult<Self> {
        let file = get_config(&args.root)?;
        let ignore_file = parse_ignore_file(args.root.join(IGNORE_FILE))?;
        Ok(Self::resolve(args, file, ignore_file))
    }
}
