//! Identifier newtypes with smart constructors.
//!
//! Both identifiers validate their shape at construction time; the raw
//! constructors are never exported.

use std::fmt;
use std::str::FromStr;

/// Number of hex digits in a SHA-1 rendered id.
const SHA1_HEX_LEN: usize = 40;

/// Number of hex digits in a SHA-256 rendered id.
const SHA256_HEX_LEN: usize = 64;

/// Prefix character of every Change-Id.
const CHANGE_ID_PREFIX: char = 'I';

/// A Change-Id value: `I` followed by exactly 40 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeId(String);

impl ChangeId {
    /// Smart constructor: validates the `I` + 40 lowercase hex shape.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidChangeId> {
        let raw = raw.into();
        let Some(digits) = raw.strip_prefix(CHANGE_ID_PREFIX) else {
            return Err(InvalidChangeId::MissingPrefix(raw));
        };
        if digits.len() != SHA1_HEX_LEN || !is_lower_hex(digits) {
            return Err(InvalidChangeId::BadDigits(raw));
        }
        Ok(Self(raw))
    }

    /// Build a Change-Id from a raw 20-byte digest.
    pub fn from_digest(digest: &[u8; 20]) -> Self {
        let mut id = String::with_capacity(1 + SHA1_HEX_LEN);
        id.push(CHANGE_ID_PREFIX);
        id.push_str(&hex_encode(digest));
        Self(id)
    }

    /// The full `I…` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ChangeId {
    type Err = InvalidChangeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A repository object id (tree or commit), as lowercase hex.
///
/// Accepts both SHA-1 (40 digits) and SHA-256 (64 digits) repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Smart constructor: validates length and lowercase hex digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidObjectId> {
        let raw = raw.into();
        if raw.len() != SHA1_HEX_LEN && raw.len() != SHA256_HEX_LEN {
            return Err(InvalidObjectId::BadLength(raw));
        }
        if !is_lower_hex(&raw) {
            return Err(InvalidObjectId::NotHex(raw));
        }
        Ok(Self(raw))
    }

    /// The hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Encode raw bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ===== Error Types =====

/// Rejection reasons for [`ChangeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidChangeId {
    /// The value does not start with `I`.
    #[error("Change-Id must start with 'I': {0:?}")]
    MissingPrefix(String),
    /// The digits after `I` are not 40 lowercase hex characters.
    #[error("Change-Id must be 'I' followed by 40 lowercase hex digits: {0:?}")]
    BadDigits(String),
}

/// Rejection reasons for [`ObjectId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidObjectId {
    /// Neither 40 nor 64 characters long.
    #[error("object id must be 40 or 64 hex digits: {0:?}")]
    BadLength(String),
    /// Contains characters outside `0-9a-f`.
    #[error("object id must be lowercase hex: {0:?}")]
    NotHex(String),
}

// ===== Tests =====
