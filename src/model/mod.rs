//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod footer;
pub mod identifiers;
pub mod message;
pub mod metadata;

// Re-export for convenience
pub use error::{AppError, InputError, MetadataError};
pub use footer::{Continuation, FooterBlock, FooterEntry, FooterKind, CHANGE_ID_KEY};
pub use identifiers::{ChangeId, InvalidChangeId, InvalidObjectId, ObjectId};
pub use message::{LineEnding, Paragraph, ParsedMessage};
pub use metadata::{CommitMetadata, Identity};
