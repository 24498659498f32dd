//! Line classification for the header rewriter.
//! Maps a single line of header text to the category that decides how the
//! rewriter treats it. Classification has no side effects and carries no state.
//!
//! Lines are raw bytes: headers are not required to be valid UTF-8, and every
//! byte the rewriter looks for (`#`, `;`, `//`) is ASCII.

use regex::bytes::Regex;

use crate::error::{MigrationError, MigrationResult};

/// Category of a single line, as seen by the rewriter in its normal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but a line terminator
    Blank,
    /// Optional leading whitespace followed by `#`
    Preprocessor,
    /// Optional leading whitespace followed by a declaration marker.
    /// `terminator` is the byte offset of the first `;` on the line, if any.
    Declaration { terminator: Option<usize> },
    /// Any other line
    Plain,
}

/// Splits a line into its text and its terminator (`"\r\n"`, `"\n"` or `""`).
pub fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    let body_len = if line.ends_with(b"\r\n") {
        line.len() - 2
    } else if line.ends_with(b"\n") {
        line.len() - 1
    } else {
        line.len()
    };
    line.split_at(body_len)
}

/// Byte offset of the first `;` in `line`.
pub fn find_terminator(line: &[u8]) -> Option<usize> {
    line.iter().position(|&b| b == b';')
}

/// Builds the regex alternative for one marker. A word boundary is only
/// required after markers ending in a word character, so `NNG_DECL` does not
/// match `NNG_DECLARE` while `__declspec(dllexport)` still matches before a space.
fn marker_pattern(marker: &str) -> String {
    let escaped = regex::escape(marker);
    match marker.chars().last() {
        Some(c) if c.is_alphanumeric() || c == '_' => format!(r"{}\b", escaped),
        _ => escaped,
    }
}

/// Compiled patterns for the line categories.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    preprocessor: Regex,
    declaration: Regex,
    line_comment: Regex,
}

impl LineClassifier {
    /// Builds a classifier recognising the given declaration markers.
    ///
    /// Markers are matched literally at the start of the line (after optional
    /// whitespace). Markers ending in a word character must end on a word boundary.
    ///
    /// # Errors
    /// * `MigrationError::PatternError` if no marker is given or a marker is empty
    pub fn new<S: AsRef<str>>(markers: &[S]) -> MigrationResult<Self> {
        if markers.is_empty() {
            return Err(MigrationError::PatternError(
                "at least one declaration marker is required".to_string(),
            ));
        }
        let mut alternatives = Vec::with_capacity(markers.len());
        for marker in markers {
            let marker = marker.as_ref().trim();
            if marker.is_empty() {
                return Err(MigrationError::PatternError(
                    "declaration marker must not be empty".to_string(),
                ));
            }
            alternatives.push(marker_pattern(marker));
        }

        let declaration = Regex::new(&format!(r"^\s*(?:{})", alternatives.join("|")))
            .map_err(|e| MigrationError::PatternError(e.to_string()))?;
        let preprocessor =
            Regex::new(r"^\s*#").map_err(|e| MigrationError::PatternError(e.to_string()))?;
        let line_comment =
            Regex::new(r"\s*//").map_err(|e| MigrationError::PatternError(e.to_string()))?;

        Ok(Self {
            preprocessor,
            declaration,
            line_comment,
        })
    }

    /// Classifies a line. The line may still carry its terminator.
    pub fn classify(&self, line: &[u8]) -> LineKind {
        if line == b"\n" || line == b"\r\n" {
            LineKind::Blank
        } else if self.preprocessor.is_match(line) {
            LineKind::Preprocessor
        } else if self.declaration.is_match(line) {
            LineKind::Declaration {
                terminator: find_terminator(line),
            }
        } else {
            LineKind::Plain
        }
    }

    /// Removes a trailing `//` comment and the whitespace in front of it.
    /// `text` must not contain a line terminator.
    pub fn strip_line_comment<'a>(&self, text: &'a [u8]) -> &'a [u8] {
        match self.line_comment.find(text) {
            Some(found) => &text[..found.start()],
            None => text,
        }
    }
}
