//! The commit-msg hook pipeline.
//!
//! Parser → classifier → computer (only when no Change-Id exists) →
//! injector, wrapped into one call that reports what it did.

use crate::classifier::classify;
use crate::computer::{ChangeIdStrategy, CommitObjectStrategy};
use crate::injector::inject;
use crate::model::{ChangeId, CommitMetadata};
use crate::parser::MessageParser;
use tracing::{debug, info};

/// Result of running the hook over one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A Change-Id was computed and inserted.
    Inserted {
        /// The rewritten message.
        message: String,
        /// The id that was inserted.
        change_id: ChangeId,
    },
    /// The footer block already carries a Change-Id; nothing changes.
    AlreadyTagged,
    /// Nothing but scaffolding; nothing changes.
    Empty,
    /// The hook is switched off by configuration; nothing changes.
    Disabled,
}

impl Outcome {
    /// The text to write back, given the original draft.
    pub fn text<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Outcome::Inserted { message, .. } => message.as_str(),
            Outcome::AlreadyTagged | Outcome::Empty | Outcome::Disabled => original,
        }
    }

    /// Whether the message differs from the draft.
    pub fn is_modified(&self) -> bool {
        matches!(self, Outcome::Inserted { .. })
    }

    /// The inserted id, if any.
    pub fn change_id(&self) -> Option<&ChangeId> {
        match self {
            Outcome::Inserted { change_id, .. } => Some(change_id),
            _ => None,
        }
    }
}

/// Configured hook: a parser, an id strategy and an on/off switch.
#[derive(Debug, Clone)]
pub struct ChangeIdHook<S = CommitObjectStrategy> {
    parser: MessageParser,
    strategy: S,
    enabled: bool,
}

impl Default for ChangeIdHook {
    fn default() -> Self {
        Self::new(MessageParser::default())
    }
}

impl ChangeIdHook {
    /// Hook using the default commit-object strategy.
    pub fn new(parser: MessageParser) -> Self {
        Self::with_strategy(parser, CommitObjectStrategy)
    }
}

impl<S: ChangeIdStrategy> ChangeIdHook<S> {
    /// Hook using a custom id strategy.
    pub fn with_strategy(parser: MessageParser, strategy: S) -> Self {
        Self {
            parser,
            strategy,
            enabled: true,
        }
    }

    /// Switch the hook on or off.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether the hook will touch messages at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run the pipeline over `raw`.
    ///
    /// Never fails: metadata was validated when it was constructed, and
    /// every non-inserting path returns the draft unchanged.
    pub fn run(&self, raw: &str, metadata: &CommitMetadata) -> Outcome {
        if !self.enabled {
            debug!("Change-Id hook disabled by configuration");
            return Outcome::Disabled;
        }

        let parsed = self.parser.parse(raw);
        if parsed.is_empty() {
            debug!("commit message is empty after stripping scaffolding");
            return Outcome::Empty;
        }

        let classified = classify(parsed);
        if let Some(existing) = classified.existing_change_id() {
            debug!(change_id = existing, "commit message already carries a Change-Id");
            return Outcome::AlreadyTagged;
        }

        let change_id = self.strategy.compute(metadata, classified.body());
        let message = inject(classified, &change_id);
        info!(change_id = %change_id, "inserted Change-Id");

        Outcome::Inserted { message, change_id }
    }
}

/// Run the default hook over `raw`.
pub fn add_change_id(raw: &str, metadata: &CommitMetadata) -> Outcome {
    ChangeIdHook::default().run(raw, metadata)
}
