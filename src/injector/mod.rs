//! Change-Id footer injection.
//!
//! Places the `Change-Id` entry inside the footer block (or in a new one)
//! and renders the final message text.

use crate::classifier::ClassifiedMessage;
use crate::model::message::truncate_suffix;
use crate::model::{ChangeId, FooterBlock, FooterEntry, FooterKind};

/// Where the Change-Id entry goes in an existing block.
///
/// Right after a leading run of `Bug`/`Issue` entries, otherwise first.
/// Bug/Issue entries further down the block do not move the insertion point.
pub fn insertion_index(block: &FooterBlock) -> usize {
    block
        .entries()
        .iter()
        .take_while(|e| e.kind() == FooterKind::BugOrIssue)
        .count()
}

/// Insert `change_id` and render the message.
///
/// Body paragraphs are emitted byte for byte, each line with its own
/// terminator, followed by one blank line and the footer block. Blank
/// separators and footer lines use the detected convention. A draft
/// without a final newline does not gain one.
pub fn inject(message: ClassifiedMessage, change_id: &ChangeId) -> String {
    let nl = message.line_ending().as_str();
    let trailing_newline = message.has_trailing_newline();
    let (body, footer) = message.into_parts();

    let entry = FooterEntry::change_id(change_id);
    let footer = match footer {
        Some(mut block) => {
            let index = insertion_index(&block);
            block.insert(index, entry);
            block
        }
        None => FooterBlock::new(vec![entry]),
    };

    let mut text = String::new();
    for paragraph in &body {
        text.push_str(&paragraph.render());
        text.push_str(nl);
    }
    for line in footer.lines() {
        text.push_str(line);
        text.push_str(nl);
    }
    if !trailing_newline {
        truncate_suffix(&mut text, nl);
    }
    text
}
