use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::course::CourseCode;
use super::person::PersonStatus;

/// Academic rank of a faculty member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Lecturer,
    AssistantProf,
    AssociateProf,
    FullProf,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lecturer => "lecturer",
            Self::AssistantProf => "assistant_prof",
            Self::AssociateProf => "associate_prof",
            Self::FullProf => "full_prof",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lecturer" => Some(Self::Lecturer),
            "assistant_prof" => Some(Self::AssistantProf),
            "associate_prof" => Some(Self::AssociateProf),
            "full_prof" => Some(Self::FullProf),
            _ => None,
        }
    }
}

/// Faculty-side data of a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyProfile {
    pub department: String,
    pub rank: Rank,
    /// Codes of the courses this faculty member teaches. Mirrored by each
    /// course's `instructor` field.
    pub taught: BTreeSet<CourseCode>,
}

impl FacultyProfile {
    pub fn new(department: impl Into<String>, rank: Rank) -> Self {
        Self {
            department: department.into(),
            rank,
            taught: BTreeSet::new(),
        }
    }
}

/// Input for registering a new faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFacultyInput {
    pub name: String,
    pub age: u32,
    pub department: String,
    pub rank: Rank,
}

/// Row in the faculty report, ordered by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyRow {
    pub id: String,
    pub name: String,
    pub department: String,
    pub rank: Rank,
    pub status: PersonStatus,
}
