use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag carried by every [`PersonId`].
///
/// The tag is the first character of the rendered id (`S1`, `F2`, `D3`),
/// keeping ids readable in reports and on the command line.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum RoleTag {
    Student,
    Faculty,
    DualRole,
}

impl RoleTag {
    pub fn as_char(&self) -> char {
        match self {
            Self::Student => 'S',
            Self::Faculty => 'F',
            Self::DualRole => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Student),
            'F' => Some(Self::Faculty),
            'D' => Some(Self::DualRole),
            _ => None,
        }
    }
}

/// Unique identifier of a university member.
///
/// Ids are issued sequentially per role tag and never reused. The ordering
/// (tag, then sequence) makes every id-ordered listing deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct PersonId {
    tag: RoleTag,
    seq: u32,
}

impl PersonId {
    pub(crate) fn new(tag: RoleTag, seq: u32) -> Self {
        Self { tag, seq }
    }

    pub fn tag(&self) -> RoleTag {
        self.tag
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.as_char(), self.seq)
    }
}

/// Error returned when a string is not a valid person id.
#[derive(Debug, Error)]
#[error("invalid person id `{0}`")]
pub struct ParsePersonIdError(String);

impl FromStr for PersonId {
    type Err = ParsePersonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let tag = chars
            .next()
            .and_then(RoleTag::from_char)
            .ok_or_else(|| ParsePersonIdError(s.to_string()))?;
        let seq = chars
            .as_str()
            .parse::<u32>()
            .map_err(|_| ParsePersonIdError(s.to_string()))?;
        Ok(Self { tag, seq })
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PersonId {
    type Error = ParsePersonIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Whether a member is still active at the university.
///
/// Members are never deleted; a member who quits is marked `Inactive` and
/// stays visible to every report so historical relationships keep resolving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PersonStatus {
    Active,
    Inactive,
}

impl PersonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// The identity core shared by every university member.
///
/// A person is never registered on its own; it is always embedded in a
/// [`super::Member`] together with at least one role profile. Dual-role
/// members hold both profiles over this single identity, so id, name, and
/// age exist exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub age: u32,
    pub status: PersonStatus,
    pub created_at: DateTime<Utc>,
}
