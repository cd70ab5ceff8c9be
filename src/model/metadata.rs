//! Commit metadata supplied by the surrounding tool.
//!
//! The engine never derives any of these values itself. Construction is the
//! only place metadata is validated; once a [`CommitMetadata`] exists the
//! Change-Id computation over it cannot fail.

use chrono::{DateTime, FixedOffset};

use crate::model::error::MetadataError;
use crate::model::identifiers::ObjectId;

/// A person identity with the moment it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    email: String,
    when: DateTime<FixedOffset>,
}

impl Identity {
    /// Smart constructor: rejects empty names/emails and characters that
    /// would break the `Name <email>` serialization.
    ///
    /// `field` names the identity in errors ("author" or "committer").
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        when: DateTime<FixedOffset>,
        field: &'static str,
    ) -> Result<Self, MetadataError> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(MetadataError::MissingName { field });
        }
        if email.trim().is_empty() {
            return Err(MetadataError::MissingEmail { field });
        }
        for raw in [&name, &email] {
            if raw.contains(['<', '>', '\n', '\r']) {
                return Err(MetadataError::ForbiddenCharacter {
                    field,
                    raw: raw.clone(),
                });
            }
        }

        Ok(Self { name, email, when })
    }

    /// Parse a git ident line: `Name <email> <epoch-seconds> <±HHMM>`.
    ///
    /// This is the format printed by `git var GIT_AUTHOR_IDENT`.
    pub fn parse(raw: &str, field: &'static str) -> Result<Self, MetadataError> {
        let malformed = || MetadataError::MalformedIdent {
            field,
            raw: raw.to_string(),
        };

        let open = raw.find('<').ok_or_else(malformed)?;
        let close = raw[open..].find('>').map(|i| open + i).ok_or_else(malformed)?;

        let name = raw[..open].trim();
        let email = raw[open + 1..close].trim();

        let mut rest = raw[close + 1..].split_whitespace();
        let (Some(epoch), Some(offset), None) = (rest.next(), rest.next(), rest.next()) else {
            return Err(malformed());
        };

        let offset = parse_offset(offset, field)?;
        let seconds: i64 = epoch.parse().map_err(|_| MetadataError::InvalidTimestamp {
            field,
            raw: epoch.to_string(),
        })?;
        let when = DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| MetadataError::InvalidTimestamp {
                field,
                raw: epoch.to_string(),
            })?
            .with_timezone(&offset);

        Self::new(name, email, when, field)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address (without angle brackets).
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Timestamp with its original timezone offset.
    pub fn when(&self) -> DateTime<FixedOffset> {
        self.when
    }

    /// Render as `Name <email> <epoch-seconds> <±HHMM>`.
    pub fn to_ident(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.when.timestamp(),
            self.when.format("%z")
        )
    }
}

/// Parse a `±HHMM` timezone offset.
fn parse_offset(raw: &str, field: &'static str) -> Result<FixedOffset, MetadataError> {
    let invalid = || MetadataError::InvalidTimezone {
        field,
        raw: raw.to_string(),
    };

    let bytes = raw.as_bytes();
    if bytes.len() != 5 || !bytes[1..].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(invalid()),
    };

    let hours: i32 = raw[1..3].parse().map_err(|_| invalid())?;
    let minutes: i32 = raw[3..5].parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Everything about the pending commit that feeds the Change-Id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMetadata {
    tree: ObjectId,
    parent: Option<ObjectId>,
    author: Identity,
    committer: Identity,
}

impl CommitMetadata {
    /// Assemble metadata from already-validated parts.
    pub fn new(
        tree: ObjectId,
        parent: Option<ObjectId>,
        author: Identity,
        committer: Identity,
    ) -> Self {
        Self {
            tree,
            parent,
            author,
            committer,
        }
    }

    /// Parse and validate metadata from raw strings as supplied on the
    /// command line. `parent` is `None` for root commits.
    pub fn from_raw(
        tree: &str,
        parent: Option<&str>,
        author: &str,
        committer: &str,
    ) -> Result<Self, MetadataError> {
        let tree = ObjectId::new(tree).map_err(|source| MetadataError::InvalidObjectId {
            field: "tree",
            source,
        })?;
        let parent = parent
            .map(|p| {
                ObjectId::new(p).map_err(|source| MetadataError::InvalidObjectId {
                    field: "parent",
                    source,
                })
            })
            .transpose()?;
        let author = Identity::parse(author, "author")?;
        let committer = Identity::parse(committer, "committer")?;

        Ok(Self::new(tree, parent, author, committer))
    }

    /// Tree id of the staged content.
    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }

    /// First parent, absent for root commits.
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    /// Author identity.
    pub fn author(&self) -> &Identity {
        &self.author
    }

    /// Committer identity.
    pub fn committer(&self) -> &Identity {
        &self.committer
    }
}
