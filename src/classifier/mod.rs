//! Footer block classification.
//!
//! Decides whether the last paragraph of a message is a trailer block and,
//! if so, segments it into [`FooterEntry`] values. Classification is a pure
//! predicate over single lines ([`classify_line`]) composed by one forward
//! scan over the candidate paragraph ([`segment`]).

use crate::model::{
    Continuation, FooterBlock, FooterEntry, FooterKind, LineEnding, Paragraph, ParsedMessage,
};
use tracing::debug;

/// What a single line looks like, in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `Key: value`
    Trailer {
        /// The key before the colon.
        key: &'a str,
        /// The value after the colon and its whitespace.
        value: &'a str,
    },
    /// A line that extends the preceding trailer.
    Continuation(Continuation),
    /// Anything else.
    Prose,
}

/// Classify one line.
///
/// A trailer line is `<token>:` followed by a whitespace character, where
/// `<token>` is an ASCII letter followed by letters, digits or hyphens. This
/// rejects `http://host/` (no whitespace after the colon) and a bare `Key:`.
pub fn classify_line(line: &str) -> LineClass<'_> {
    if let Some(continuation) = continuation_of(line) {
        return LineClass::Continuation(continuation);
    }
    match split_trailer(line) {
        Some((key, value)) => LineClass::Trailer { key, value },
        None => LineClass::Prose,
    }
}

fn continuation_of(line: &str) -> Option<Continuation> {
    match line.chars().next()? {
        ' ' | '\t' => Some(Continuation::Indented),
        '[' => Some(Continuation::Bracketed),
        _ => None,
    }
}

fn split_trailer(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let key = &line[..colon];
    if !is_trailer_key(key) {
        return None;
    }
    let rest = &line[colon + 1..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some((key, rest.trim_start()))
}

fn is_trailer_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Segment a paragraph into a footer block.
///
/// Returns `None` when any line is prose, or when a continuation line has
/// no trailer line before it; the paragraph is then ordinary body text.
pub fn segment(paragraph: &Paragraph) -> Option<FooterBlock> {
    let mut entries: Vec<FooterEntry> = Vec::new();

    for line in paragraph.lines() {
        match classify_line(line) {
            LineClass::Trailer { key, value } => {
                entries.push(FooterEntry::from_source(
                    line.clone(),
                    key.to_string(),
                    value.to_string(),
                ));
            }
            LineClass::Continuation(_) => {
                entries.last_mut()?.push_continuation(line.clone());
            }
            LineClass::Prose => return None,
        }
    }

    if entries.is_empty() {
        return None;
    }
    Some(FooterBlock::new(entries))
}

/// A message split into body paragraphs and an optional footer block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMessage {
    body: Vec<Paragraph>,
    footer: Option<FooterBlock>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl ClassifiedMessage {
    /// Body paragraphs: everything except an accepted footer block.
    pub fn body(&self) -> &[Paragraph] {
        &self.body
    }

    /// The footer block, when the last paragraph qualified.
    pub fn footer(&self) -> Option<&FooterBlock> {
        self.footer.as_ref()
    }

    /// Value of the Change-Id trailer already in the footer block, if any.
    pub fn existing_change_id(&self) -> Option<&str> {
        self.footer
            .as_ref()?
            .find(FooterKind::ChangeId)
            .map(FooterEntry::value)
    }

    /// Terminator convention of the source message.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Whether the source message ended with a terminator.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Split into parts for the injector.
    pub(crate) fn into_parts(self) -> (Vec<Paragraph>, Option<FooterBlock>) {
        (self.body, self.footer)
    }
}

/// Classify a parsed message.
///
/// Only the last paragraph is a candidate, and only when it is not also the
/// first: a lone subject line such as `fix: this thing` is never a footer.
pub fn classify(message: ParsedMessage) -> ClassifiedMessage {
    let line_ending = message.line_ending();
    let trailing_newline = message.has_trailing_newline();
    let mut body = message.into_paragraphs();

    let footer = if body.len() >= 2 {
        body.last().and_then(segment)
    } else {
        None
    };
    if footer.is_some() {
        body.pop();
    }

    debug!(
        body_paragraphs = body.len(),
        footer_entries = footer.as_ref().map_or(0, |f| f.entries().len()),
        "classified commit message"
    );

    ClassifiedMessage {
        body,
        footer,
        line_ending,
        trailing_newline,
    }
}
