//! Error types for change-id.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`], which the binary reports.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every failure the binary can hit
//!   - [`InputError`] - Reading or writing the draft message (file not found, IO, UTF-8)
//!   - [`MetadataError`] - Malformed commit metadata (identities, object ids)
//!   - [`ConfigError`] - Unreadable or invalid config file
//!
//! # What is not an error
//!
//! An empty message and a message that already carries a Change-Id are normal
//! outcomes of the hook (see [`crate::hook::Outcome`]), not errors. Every
//! error here is fatal for the invocation: the commit is aborted and the
//! draft is left untouched. Log file setup failures are not errors here: the
//! binary warns and continues without a log.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::model::identifiers::InvalidObjectId;

/// Top-level error encompassing all failure modes of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the draft message or write the result back.
    #[error("Failed to access commit message: {0}")]
    Input(#[from] InputError),

    /// Commit metadata was missing or unparsable.
    ///
    /// Raised before any text mutation, so nothing is written.
    #[error("Malformed commit metadata: {0}")]
    Metadata(#[from] MetadataError),

    /// The config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors encountered when reading or writing the draft message.
#[derive(Debug, Error)]
pub enum InputError {
    /// The message file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use change_id::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from(".git/COMMIT_EDITMSG")
    /// };
    /// assert!(err.to_string().contains("COMMIT_EDITMSG"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The message is not valid UTF-8.
    #[error("Commit message is not valid UTF-8")]
    NotUtf8,

    /// Generic I/O error on the input or output stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed commit metadata.
///
/// Every variant names the metadata `field` it was found in ("author",
/// "committer", "tree", "parent") so the hook can report precisely which
/// input the surrounding tool got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The identity has an empty name.
    ///
    /// # Examples
    ///
    /// ```
    /// use change_id::model::error::MetadataError;
    ///
    /// let err = MetadataError::MissingName { field: "author" };
    /// assert!(err.to_string().contains("author"));
    /// ```
    #[error("{field} identity has no name")]
    MissingName {
        /// Which identity.
        field: &'static str,
    },

    /// The identity has an empty email.
    #[error("{field} identity has no email")]
    MissingEmail {
        /// Which identity.
        field: &'static str,
    },

    /// A name or email contains characters that would corrupt the
    /// serialized identity line (`<`, `>` or a line break).
    #[error("{field} identity contains forbidden character in {raw:?}")]
    ForbiddenCharacter {
        /// Which identity.
        field: &'static str,
        /// The offending name or email.
        raw: String,
    },

    /// The identity string is not of the form `Name <email> epoch ±HHMM`.
    #[error("{field} identity is not 'Name <email> <epoch> <+HHMM>': {raw:?}")]
    MalformedIdent {
        /// Which identity.
        field: &'static str,
        /// The raw identity string.
        raw: String,
    },

    /// The epoch seconds could not be parsed or are out of range.
    #[error("{field} timestamp is invalid: {raw:?}")]
    InvalidTimestamp {
        /// Which identity.
        field: &'static str,
        /// The raw timestamp text.
        raw: String,
    },

    /// The timezone offset is not `±HHMM` or is out of range.
    #[error("{field} timezone offset is invalid: {raw:?}")]
    InvalidTimezone {
        /// Which identity.
        field: &'static str,
        /// The raw offset text.
        raw: String,
    },

    /// A tree or parent id is not a valid object id.
    #[error("{field} id is invalid: {source}")]
    InvalidObjectId {
        /// Which id ("tree" or "parent").
        field: &'static str,
        /// The underlying validation failure.
        #[source]
        source: InvalidObjectId,
    },
}
