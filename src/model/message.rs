//! Structured view of a commit message.

/// Line terminator convention of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Detect the convention from the first terminator in `text`.
    ///
    /// Text without any terminator defaults to [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    /// The terminator characters.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A run of consecutive non-blank lines.
///
/// Lines are stored without their terminators, each alongside the
/// terminator it had in the draft. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
    endings: Vec<LineEnding>,
}

impl Paragraph {
    /// Build a paragraph whose lines all end in `\n`.
    pub fn new(lines: Vec<String>) -> Self {
        let endings = vec![LineEnding::Lf; lines.len()];
        Self::from_terminated(lines.into_iter().zip(endings).collect())
    }

    /// Build a paragraph from lines paired with their own terminators.
    pub fn from_terminated(lines: Vec<(String, LineEnding)>) -> Self {
        debug_assert!(!lines.is_empty(), "paragraphs are never empty");
        let (lines, endings) = lines.into_iter().unzip();
        Self { lines, endings }
    }

    /// The lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every line followed by its own terminator.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .map(|(line, ending)| format!("{line}{}", ending.as_str()))
            .collect()
    }
}

/// A draft message after scaffolding removal, split into paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    paragraphs: Vec<Paragraph>,
    line_ending: LineEnding,
    trailing_newline: bool,
}

impl ParsedMessage {
    /// Assemble a parsed message.
    pub fn new(paragraphs: Vec<Paragraph>, line_ending: LineEnding, trailing_newline: bool) -> Self {
        Self {
            paragraphs,
            line_ending,
            trailing_newline,
        }
    }

    /// Paragraphs in message order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Take ownership of the paragraphs.
    pub fn into_paragraphs(self) -> Vec<Paragraph> {
        self.paragraphs
    }

    /// True when nothing but scaffolding and blank lines was present.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Detected terminator convention.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Whether the last content line was followed by a terminator.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Render back to text: paragraphs separated by one blank line in the
    /// detected convention, every content line keeping its own terminator.
    pub fn render(&self) -> String {
        let ending = self.line_ending.as_str();
        let mut text = self
            .paragraphs
            .iter()
            .map(Paragraph::render)
            .collect::<Vec<_>>()
            .join(ending);
        if !self.trailing_newline {
            truncate_suffix(&mut text, ending);
        }
        text
    }
}

/// Drop `suffix` from the end of `text` if present.
pub(crate) fn truncate_suffix(text: &mut String, suffix: &str) {
    if text.ends_with(suffix) {
        text.truncate(text.len() - suffix.len());
    }
}
