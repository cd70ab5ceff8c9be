//! Footer (trailer) block types.

use crate::model::identifiers::ChangeId;

/// Key of the trailer this crate manages.
pub const CHANGE_ID_KEY: &str = "Change-Id";

const SIGNED_OFF_BY_KEY: &str = "Signed-off-by";
const BUG_KEY: &str = "Bug";
const ISSUE_KEY: &str = "Issue";

/// How a line attaches itself to the preceding trailer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Starts with a space or tab.
    Indented,
    /// Starts with `[`, e.g. a kernel-style `[maintainer: note]` annotation.
    Bracketed,
}

/// Category of a footer entry, decided by its key alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterKind {
    /// `Change-Id`
    ChangeId,
    /// `Signed-off-by`
    SignedOffBy,
    /// `Bug` or `Issue`
    BugOrIssue,
    /// Any other well-formed key.
    Other,
}

impl FooterKind {
    /// Classify a key, comparing ASCII case-insensitively.
    pub fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case(CHANGE_ID_KEY) {
            FooterKind::ChangeId
        } else if key.eq_ignore_ascii_case(SIGNED_OFF_BY_KEY) {
            FooterKind::SignedOffBy
        } else if key.eq_ignore_ascii_case(BUG_KEY) || key.eq_ignore_ascii_case(ISSUE_KEY) {
            FooterKind::BugOrIssue
        } else {
            FooterKind::Other
        }
    }
}

/// One trailer: its first `Key: value` line plus attached continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterEntry {
    line: String,
    key: String,
    value: String,
    continuations: Vec<String>,
}

impl FooterEntry {
    /// Create a fresh `key: value` entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        Self {
            line: format!("{key}: {value}"),
            key,
            value,
            continuations: Vec::new(),
        }
    }

    /// The `Change-Id: I…` entry for `id`.
    pub fn change_id(id: &ChangeId) -> Self {
        Self::new(CHANGE_ID_KEY, id.as_str())
    }

    /// Wrap an existing source line that was already split into key and value.
    ///
    /// The line is kept verbatim so re-serialization is byte-exact.
    pub(crate) fn from_source(line: String, key: String, value: String) -> Self {
        Self {
            line,
            key,
            value,
            continuations: Vec::new(),
        }
    }

    pub(crate) fn push_continuation(&mut self, line: String) {
        self.continuations.push(line);
    }

    /// The key as written.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The first-line value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Continuation lines, verbatim.
    pub fn continuations(&self) -> &[String] {
        &self.continuations
    }

    /// Category of this entry.
    pub fn kind(&self) -> FooterKind {
        FooterKind::from_key(&self.key)
    }

    /// All source lines of the entry: first line, then continuations.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.line.as_str()).chain(self.continuations.iter().map(String::as_str))
    }
}

/// A qualified footer paragraph, segmented into entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterBlock {
    entries: Vec<FooterEntry>,
}

impl FooterBlock {
    /// Build a block; callers guarantee at least one entry.
    pub fn new(entries: Vec<FooterEntry>) -> Self {
        debug_assert!(!entries.is_empty(), "footer blocks are never empty");
        Self { entries }
    }

    /// Entries in block order.
    pub fn entries(&self) -> &[FooterEntry] {
        &self.entries
    }

    /// First entry of the given kind.
    pub fn find(&self, kind: FooterKind) -> Option<&FooterEntry> {
        self.entries.iter().find(|e| e.kind() == kind)
    }

    /// Insert `entry` before the entry currently at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, entry: FooterEntry) {
        self.entries.insert(index, entry);
    }

    /// Every line of the block in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().flat_map(FooterEntry::lines)
    }
}
