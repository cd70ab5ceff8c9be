//! Change-Id computation.
//!
//! The id is the SHA-1 of a synthetic commit object built from the commit
//! metadata and the footer-free message body, hashed exactly like
//! `git hash-object -t commit` would hash it. The serialization is internal
//! to this module; it is never written anywhere.

use crate::model::{ChangeId, CommitMetadata, Paragraph};
use sha1::{Digest, Sha1};

/// A way of deriving a Change-Id from commit content.
pub trait ChangeIdStrategy {
    /// Derive the id for a commit whose non-footer paragraphs are `body`.
    fn compute(&self, metadata: &CommitMetadata, body: &[Paragraph]) -> ChangeId;
}

/// Default strategy: SHA-1 over a git commit object serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitObjectStrategy;

impl ChangeIdStrategy for CommitObjectStrategy {
    fn compute(&self, metadata: &CommitMetadata, body: &[Paragraph]) -> ChangeId {
        let payload = commit_payload(metadata, &canonical_message(body));

        let mut hasher = Sha1::new();
        hasher.update(format!("commit {}\0", payload.len()).as_bytes());
        hasher.update(payload.as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest);
        ChangeId::from_digest(&bytes)
    }
}

/// Compute a Change-Id with the default [`CommitObjectStrategy`].
pub fn compute(metadata: &CommitMetadata, body: &[Paragraph]) -> ChangeId {
    CommitObjectStrategy.compute(metadata, body)
}

/// Message text fed to the hash.
///
/// Lines are joined with `\n` whatever the source convention was, paragraphs
/// with one blank line, and there is no trailing newline.
pub fn canonical_message(body: &[Paragraph]) -> String {
    body.iter()
        .map(|p| p.lines().join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The synthetic commit object body (without the object header).
///
/// Header order is fixed: tree, optional parent, author, committer, blank
/// line, message.
pub fn commit_payload(metadata: &CommitMetadata, message: &str) -> String {
    let mut payload = format!("tree {}\n", metadata.tree());
    if let Some(parent) = metadata.parent() {
        payload.push_str(&format!("parent {parent}\n"));
    }
    payload.push_str(&format!("author {}\n", metadata.author().to_ident()));
    payload.push_str(&format!("committer {}\n", metadata.committer().to_ident()));
    payload.push('\n');
    payload.push_str(message);
    payload
}
