use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::course::CourseCode;
use super::person::PersonStatus;

/// Student-side data of a member.
///
/// `enrolled` is mutated only by the registry so it stays mirrored with the
/// roster of each course it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub major: String,
    /// Grade point average, 0.0..=4.0 inclusive.
    pub gpa: f64,
    /// Codes of the courses this student is enrolled in.
    pub enrolled: BTreeSet<CourseCode>,
}

impl StudentProfile {
    pub fn new(major: impl Into<String>, gpa: f64) -> Self {
        Self {
            major: major.into(),
            gpa,
            enrolled: BTreeSet::new(),
        }
    }
}

/// Input for registering a new student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStudentInput {
    pub name: String,
    pub age: u32,
    pub major: String,
    /// Grade point average, 0.0..=4.0 inclusive.
    pub gpa: f64,
}

/// Row in the student report, ordered by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub major: String,
    pub gpa: f64,
    pub status: PersonStatus,
}
