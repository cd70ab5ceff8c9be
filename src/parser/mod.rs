//! Commit message parser.
//!
//! Turns raw draft text into a [`ParsedMessage`]: editor scaffolding is
//! removed, the remainder is split into paragraphs on blank lines, and the
//! line-ending and trailing-newline conventions are recorded so the
//! message can be rendered back faithfully.

use crate::model::{LineEnding, Paragraph, ParsedMessage};
use tracing::debug;

/// Default comment character used by git.
pub const DEFAULT_COMMENT_CHAR: char = '#';

/// Header of the diff preview `git commit -v` appends below the message.
pub const DIFF_MARKER: &str = "diff --git ";

/// Text following the comment character on a scissors line.
const SCISSORS_TAIL: &str = " ------------------------ >8 ------------------------";

/// Parser for draft commit messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageParser {
    comment_char: char,
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_CHAR)
    }
}

impl MessageParser {
    /// Create a parser that treats lines starting with `comment_char` as
    /// scaffolding.
    pub fn new(comment_char: char) -> Self {
        Self { comment_char }
    }

    /// The configured comment character.
    pub fn comment_char(&self) -> char {
        self.comment_char
    }

    /// Parse raw text into paragraphs.
    ///
    /// - Comment lines are dropped wherever they appear.
    /// - A diff preview header or a scissors line ends the message; it and
    ///   everything after it are dropped.
    /// - Blank (or whitespace-only) lines separate paragraphs; runs of them
    ///   collapse, and leading/trailing ones vanish.
    /// - Each content line keeps its own terminator; an unterminated last
    ///   line is given the detected convention.
    pub fn parse(&self, raw: &str) -> ParsedMessage {
        let line_ending = LineEnding::detect(raw);
        let mut paragraphs = Vec::new();
        let mut current: Vec<(String, LineEnding)> = Vec::new();
        let mut trailing_newline = false;

        for segment in raw.split_inclusive('\n') {
            let (line, ending, terminated) = match segment.strip_suffix('\n') {
                Some(line) => match line.strip_suffix('\r') {
                    Some(line) => (line, LineEnding::CrLf, true),
                    None => (line, LineEnding::Lf, true),
                },
                None => (segment, line_ending, false),
            };

            if self.is_cut_line(line) {
                debug!("scaffolding cut line found, ignoring the rest of the message");
                break;
            }
            if self.is_comment(line) {
                continue;
            }
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(Paragraph::from_terminated(std::mem::take(&mut current)));
                }
                continue;
            }

            current.push((line.to_string(), ending));
            trailing_newline = terminated;
        }

        if !current.is_empty() {
            paragraphs.push(Paragraph::from_terminated(current));
        }

        debug!(paragraphs = paragraphs.len(), "parsed commit message");
        ParsedMessage::new(paragraphs, line_ending, trailing_newline)
    }

    fn is_comment(&self, line: &str) -> bool {
        line.starts_with(self.comment_char)
    }

    fn is_cut_line(&self, line: &str) -> bool {
        if line.starts_with(DIFF_MARKER) {
            return true;
        }
        line.strip_prefix(self.comment_char)
            .is_some_and(|rest| rest == SCISSORS_TAIL)
    }
}
