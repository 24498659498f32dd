//! The line rewriter: a two-state machine that wraps declaration statements
//! in block comments and strips trailing line comments from plain code.

use log::trace;

use crate::classifier::{find_terminator, split_line_ending, LineClassifier, LineKind};

const COMMENT_OPEN: &[u8] = b"/*";
const COMMENT_CLOSE: &[u8] = b"*/";

/// State carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteState {
    /// Between statements
    #[default]
    Normal,
    /// Inside a declaration whose block comment is still open.
    /// `opened_at` is the 1-based line number of the declaration.
    AwaitingTerminator { opened_at: usize },
}

/// Result of rewriting a whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: Vec<u8>,
    /// 1-based line of a declaration whose comment was never closed
    pub unterminated: Option<usize>,
}

/// Rewrites lines one at a time.
///
/// The rewriter only remembers whether a declaration comment is open; every
/// other decision is made from the current line alone.
pub struct Rewriter<'a> {
    classifier: &'a LineClassifier,
    state: RewriteState,
    line_number: usize,
}

impl<'a> Rewriter<'a> {
    /// Creates a rewriter in the normal state, before the first line.
    pub fn new(classifier: &'a LineClassifier) -> Self {
        Self {
            classifier,
            state: RewriteState::Normal,
            line_number: 0,
        }
    }

    /// The state after the last line rewritten.
    pub fn state(&self) -> RewriteState {
        self.state
    }

    /// Rewrites one line, including its terminator.
    /// Returns `None` when the line is dropped from the output.
    pub fn rewrite_line(&mut self, line: &[u8]) -> Option<Vec<u8>> {
        self.line_number += 1;

        if let RewriteState::AwaitingTerminator { .. } = self.state {
            return Some(match find_terminator(line) {
                Some(pos) => {
                    self.state = RewriteState::Normal;
                    close_after(line, pos)
                }
                None => line.to_vec(),
            });
        }

        let kind = self.classifier.classify(line);
        trace!("line {}: {:?}", self.line_number, kind);
        match kind {
            LineKind::Blank | LineKind::Preprocessor => Some(line.to_vec()),
            LineKind::Declaration {
                terminator: Some(pos),
            } => Some([COMMENT_OPEN, &close_after(line, pos)[..]].concat()),
            LineKind::Declaration { terminator: None } => {
                self.state = RewriteState::AwaitingTerminator {
                    opened_at: self.line_number,
                };
                Some([COMMENT_OPEN, line].concat())
            }
            LineKind::Plain => {
                let (text, ending) = split_line_ending(line);
                let text = self.classifier.strip_line_comment(text);
                if text.is_empty() {
                    None
                } else {
                    Some([text, ending].concat())
                }
            }
        }
    }

    /// Consumes the rewriter and returns the state it ended in.
    pub fn finish(self) -> RewriteState {
        self.state
    }
}

/// Inserts the comment close right after the `;` at byte offset `pos`.
fn close_after(line: &[u8], pos: usize) -> Vec<u8> {
    let (head, tail) = line.split_at(pos + 1);
    [head, COMMENT_CLOSE, tail].concat()
}

/// Rewrites a whole file, line by line, starting in the normal state.
pub fn rewrite_text(classifier: &LineClassifier, text: &[u8]) -> Rewrite {
    let mut rewriter = Rewriter::new(classifier);
    let mut content = Vec::with_capacity(text.len() + 64);
    for line in text.split_inclusive(|&b| b == b'\n') {
        if let Some(rewritten) = rewriter.rewrite_line(line) {
            content.extend_from_slice(&rewritten);
        }
    }

    let unterminated = match rewriter.finish() {
        RewriteState::Normal => None,
        RewriteState::AwaitingTerminator { opened_at } => Some(opened_at),
    };

    Rewrite {
        content,
        unterminated,
    }
}
