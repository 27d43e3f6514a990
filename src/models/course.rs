use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::person::PersonId;

/// Unique key of a course, e.g. `CS301`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets the registry maps be queried with a plain `&str` code.
impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A course offering.
///
/// The relationship fields are mirrored pairs maintained by the registry:
/// `instructor` is mirrored by the faculty profile's `taught` set, and every
/// id in `students` is mirrored by that student profile's `enrolled` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    /// Assigned instructor, if any. `None` until a faculty member is assigned.
    pub instructor: Option<PersonId>,
    /// Roster of enrolled students.
    pub students: BTreeSet<PersonId>,
    pub created_at: DateTime<Utc>,
}

/// Row in the course report: code, name, instructor name (if assigned), and
/// the roster as names ordered by student id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRow {
    pub code: String,
    pub name: String,
    pub instructor: Option<String>,
    pub students: Vec<String>,
}
