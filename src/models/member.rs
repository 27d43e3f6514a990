use serde::{Deserialize, Serialize};

use super::faculty::{FacultyProfile, Rank};
use super::person::{Person, PersonId};
use super::student::StudentProfile;

/// A registered university member: one identity plus one or two role
/// profiles.
///
/// A member with both profiles is a dual-role (part-time) member. Composition
/// keeps the shared identity fields in exactly one place, and the two
/// profiles' course sets never alias: enrollment moves `student.enrolled`,
/// teaching assignments move `faculty.taught`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub person: Person,
    pub student: Option<StudentProfile>,
    pub faculty: Option<FacultyProfile>,
}

impl Member {
    pub fn id(&self) -> PersonId {
        self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn is_dual_role(&self) -> bool {
        self.student.is_some() && self.faculty.is_some()
    }
}

/// Input for registering a dual-role member: a simultaneous student and
/// faculty appointment under a single identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDualRoleInput {
    pub name: String,
    pub age: u32,
    pub major: String,
    /// Grade point average, 0.0..=4.0 inclusive.
    pub gpa: f64,
    pub department: String,
    pub rank: Rank,
}
