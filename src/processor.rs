//! Directory walk and in-place rewriting of header files.

use globset::GlobSet;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    classifier::LineClassifier,
    config::Settings,
    error::{MigrationError, MigrationResult},
    ignore::build_glob_set,
    rewriter::rewrite_text,
};

/// What happened to a single header file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// The rewritten content differs from the original
    pub changed: bool,
    /// The file was written back
    pub written: bool,
    /// 1-based line of a declaration whose comment was never closed
    pub unterminated: Option<usize>,
}

/// Totals for a whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scanned: usize,
    pub changed: Vec<PathBuf>,
    pub unterminated: Vec<PathBuf>,
}

impl Summary {
    fn record(&mut self, outcome: FileOutcome) {
        self.scanned += 1;
        if outcome.unterminated.is_some() {
            self.unterminated.push(outcome.path.clone());
        }
        if outcome.changed {
            self.changed.push(outcome.path);
        }
    }
}

/// Finds header files below a root and rewrites them.
pub struct Migrator {
    classifier: LineClassifier,
    patterns: GlobSet,
    ignored: GlobSet,
    check: bool,
    strict: bool,
}

impl Migrator {
    /// Compiles the markers and globs of `settings`.
    ///
    /// # Errors
    /// * `MigrationError::PatternError` if a marker or glob is invalid
    pub fn new(settings: &Settings) -> MigrationResult<Self> {
        Ok(Self {
            classifier: LineClassifier::new(&settings.markers)?,
            patterns: build_glob_set(&settings.patterns)?,
            ignored: build_glob_set(&settings.ignore)?,
            check: settings.check,
            strict: settings.strict,
        })
    }

    /// Returns every file below `root` that matches a header pattern and no
    /// ignore pattern, sorted by file name within each directory.
    pub fn find_headers<P: AsRef<Path>>(&self, root: P) -> MigrationResult<Vec<PathBuf>> {
        let root = root.as_ref();
        let mut headers = Vec::new();

        let walker = WalkDir::new(root).sort_by_file_name().into_iter();
        for entry in walker.filter_entry(|e| !self.is_ignored(root, e.path())) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.patterns.is_match(relative) {
                headers.push(entry.into_path());
            } else {
                debug!("Skipping {}: no header pattern matches", relative.display());
            }
        }
        Ok(headers)
    }

    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        match path.strip_prefix(root) {
            Ok(relative) if relative.as_os_str().is_empty() => false,
            Ok(relative) => {
                let ignored = self.ignored.is_match(relative);
                if ignored {
                    debug!("Skipping {} from ignore patterns", relative.display());
                }
                ignored
            }
            Err(_) => false,
        }
    }

    /// Rewrites a single file in place.
    ///
    /// In check mode nothing is written. In strict mode a file ending inside
    /// an open declaration is left untouched and an error is returned.
    pub fn migrate_file<P: AsRef<Path>>(&self, path: P) -> MigrationResult<FileOutcome> {
        let path = path.as_ref();
        debug!("Processing {}", path.display());

        let original = fs::read(path)?;
        let rewrite = rewrite_text(&self.classifier, &original);

        if let Some(line) = rewrite.unterminated {
            if self.strict {
                return Err(MigrationError::UnterminatedDeclaration {
                    path: path.display().to_string(),
                    line,
                });
            }
            warn!(
                "{}: declaration at line {} has no closing ';', block comment left open",
                path.display(),
                line
            );
        }

        let changed = rewrite.content != original;
        let written = !self.check;
        if written {
            fs::write(path, &rewrite.content)?;
        }

        match (changed, self.check) {
            (true, true) => info!("Would rewrite: '{}'", path.display()),
            (true, false) => info!("Rewritten: '{}'", path.display()),
            (false, _) => debug!("Unchanged: '{}'", path.display()),
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            changed,
            written,
            unterminated: rewrite.unterminated,
        })
    }

    /// Walks `root` and rewrites every header found, stopping at the first error.
    pub fn run<P: AsRef<Path>>(&self, root: P) -> MigrationResult<Summary> {
        let mut summary = Summary::default();
        for header in self.find_headers(root)? {
            let outcome = self.migrate_file(&header)?;
            summary.record(outcome);
        }
        Ok(summary)
    }
}
