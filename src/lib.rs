//! change-id
//!
//! Computes a stable `Change-Id` trailer for a draft commit message and
//! inserts it at the right place in the footer block, the way a review
//! system's `commit-msg` hook does.
//!
//! The engine is a pure pipeline: [`parser`] → [`classifier`] →
//! [`computer`] → [`injector`], composed by [`hook`]. The remaining
//! modules are the shell around it: [`source`] for reading and writing the
//! draft, [`config`] and [`logging`] for the binary.
//!
//! ```
//! use change_id::hook::{add_change_id, Outcome};
//! use change_id::model::CommitMetadata;
//!
//! let metadata = CommitMetadata::from_raw(
//!     "4b825dc642cb6eb9a060e54bf8d69288fbee4904",
//!     None,
//!     "J. Author <ja@example.com> 1250379778 -0330",
//!     "J. Committer <jc@example.com> 1250379778 -0330",
//! )?;
//!
//! let outcome = add_change_id("a\n", &metadata);
//! assert_eq!(
//!     outcome.text("a\n"),
//!     "a\n\nChange-Id: I7fc3876fee63c766a2063df97fbe04a2dddd8d7c\n"
//! );
//!
//! // Running again on the result changes nothing.
//! let again = add_change_id(outcome.text("a\n"), &metadata);
//! assert_eq!(again, Outcome::AlreadyTagged);
//! # Ok::<(), change_id::model::MetadataError>(())
//! ```

pub mod classifier;
pub mod computer;
pub mod config;
pub mod hook;
pub mod injector;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;

pub use hook::{add_change_id, ChangeIdHook, Outcome};
pub use model::{ChangeId, CommitMetadata};
