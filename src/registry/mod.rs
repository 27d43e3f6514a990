mod identity;

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;

use crate::error::{RegistryError, Result};
use crate::models::*;

use identity::IdGen;

/// The aggregate root owning every member and course.
///
/// All mutation goes through the methods here so the two sides of each
/// relationship (course roster ↔ student `enrolled` set, course `instructor`
/// ↔ faculty `taught` set) change together or not at all. Reads hand out
/// shared references or owned report rows.
#[derive(Debug, Default)]
pub struct University {
    members: BTreeMap<PersonId, Member>,
    courses: BTreeMap<CourseCode, Course>,
    ids: IdGen,
}

impl University {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Member registration
    // ============================================================

    pub fn add_student(&mut self, input: AddStudentInput) -> Result<PersonId> {
        validate_name(&input.name)?;
        validate_gpa(input.gpa)?;

        let id = self.ids.next(RoleTag::Student);
        self.members.insert(
            id,
            Member {
                person: Person {
                    id,
                    name: input.name,
                    age: input.age,
                    status: PersonStatus::Active,
                    created_at: Utc::now(),
                },
                student: Some(StudentProfile::new(input.major, input.gpa)),
                faculty: None,
            },
        );

        tracing::debug!(%id, "registered student");
        Ok(id)
    }

    pub fn add_faculty(&mut self, input: AddFacultyInput) -> Result<PersonId> {
        validate_name(&input.name)?;

        let id = self.ids.next(RoleTag::Faculty);
        self.members.insert(
            id,
            Member {
                person: Person {
                    id,
                    name: input.name,
                    age: input.age,
                    status: PersonStatus::Active,
                    created_at: Utc::now(),
                },
                student: None,
                faculty: Some(FacultyProfile::new(input.department, input.rank)),
            },
        );

        tracing::debug!(%id, "registered faculty");
        Ok(id)
    }

    /// Registers a member holding both a student and a faculty profile under
    /// a single identity.
    pub fn add_dual_role(&mut self, input: AddDualRoleInput) -> Result<PersonId> {
        validate_name(&input.name)?;
        validate_gpa(input.gpa)?;

        let id = self.ids.next(RoleTag::DualRole);
        self.members.insert(
            id,
            Member {
                person: Person {
                    id,
                    name: input.name,
                    age: input.age,
                    status: PersonStatus::Active,
                    created_at: Utc::now(),
                },
                student: Some(StudentProfile::new(input.major, input.gpa)),
                faculty: Some(FacultyProfile::new(input.department, input.rank)),
            },
        );

        tracing::debug!(%id, "registered dual-role member");
        Ok(id)
    }

    /// Marks a member inactive (the member "quit").
    ///
    /// The member and all of its relationships stay visible to every query;
    /// nothing is deleted. Idempotent.
    pub fn deactivate(&mut self, person_id: PersonId) -> Result<()> {
        let member = self
            .members
            .get_mut(&person_id)
            .ok_or_else(|| RegistryError::not_found(format!("person {person_id}")))?;

        member.person.status = PersonStatus::Inactive;
        tracing::info!(%person_id, "deactivated member");
        Ok(())
    }

    // ============================================================
    // Course operations
    // ============================================================

    pub fn add_course(&mut self, name: &str, code: &str) -> Result<CourseCode> {
        validate_name(name)?;
        if code.trim().is_empty() {
            return Err(RegistryError::validation("course code must not be empty"));
        }
        if self.courses.contains_key(code) {
            return Err(RegistryError::duplicate(code));
        }

        let code = CourseCode::new(code);
        self.courses.insert(
            code.clone(),
            Course {
                code: code.clone(),
                name: name.to_string(),
                instructor: None,
                students: BTreeSet::new(),
                created_at: Utc::now(),
            },
        );

        tracing::debug!(%code, "added course");
        Ok(code)
    }

    /// Assigns a faculty member as the instructor of a course, updating the
    /// course and the faculty `taught` set together.
    ///
    /// Assigning the current instructor again is a no-op. Reassigning to a
    /// different faculty member requires `replace`; the previous instructor's
    /// `taught` set then drops the course.
    pub fn assign_instructor(
        &mut self,
        code: &str,
        faculty_id: PersonId,
        replace: bool,
    ) -> Result<()> {
        let course = self
            .courses
            .get(code)
            .ok_or_else(|| RegistryError::not_found(format!("course {code}")))?;
        let member = self
            .members
            .get(&faculty_id)
            .ok_or_else(|| RegistryError::not_found(format!("person {faculty_id}")))?;
        if member.faculty.is_none() {
            return Err(RegistryError::not_found(format!("faculty {faculty_id}")));
        }

        let previous = match course.instructor {
            Some(current) if current == faculty_id => return Ok(()),
            Some(current) if !replace => {
                return Err(RegistryError::conflict(format!(
                    "course {code} is already taught by {current}"
                )));
            }
            Some(current) => Some(current),
            None => None,
        };

        // Checks passed; apply every side of the relationship.
        let course_code = CourseCode::new(code);
        if let Some(prev) = previous {
            if let Some(profile) = self
                .members
                .get_mut(&prev)
                .and_then(|m| m.faculty.as_mut())
            {
                profile.taught.remove(code);
            }
        }
        if let Some(profile) = self
            .members
            .get_mut(&faculty_id)
            .and_then(|m| m.faculty.as_mut())
        {
            profile.taught.insert(course_code.clone());
        }
        if let Some(course) = self.courses.get_mut(code) {
            course.instructor = Some(faculty_id);
        }

        tracing::debug!(course = %course_code, faculty = %faculty_id, "assigned instructor");
        Ok(())
    }

    /// Enrolls a student in a course, updating the student `enrolled` set and
    /// the course roster together.
    ///
    /// Enrolling twice is a no-op, not an error. Inactive members cannot take
    /// on new enrollment.
    pub fn enroll(&mut self, student_id: PersonId, code: &str) -> Result<()> {
        let course = self
            .courses
            .get_mut(code)
            .ok_or_else(|| RegistryError::not_found(format!("course {code}")))?;
        let member = self
            .members
            .get_mut(&student_id)
            .ok_or_else(|| RegistryError::not_found(format!("person {student_id}")))?;

        let Member {
            person, student, ..
        } = member;
        let profile = student
            .as_mut()
            .ok_or_else(|| RegistryError::not_found(format!("student {student_id}")))?;
        if profile.enrolled.contains(&course.code) {
            return Ok(());
        }
        if person.status == PersonStatus::Inactive {
            return Err(RegistryError::validation(format!(
                "member {student_id} is inactive"
            )));
        }

        profile.enrolled.insert(course.code.clone());
        course.students.insert(student_id);
        tracing::debug!(student = %student_id, course = %course.code, "enrolled");
        Ok(())
    }

    // ============================================================
    // Lookups
    // ============================================================

    pub fn member(&self, person_id: PersonId) -> Option<&Member> {
        self.members.get(&person_id)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    // ============================================================
    // Reporting
    // ============================================================

    /// Every member with a student profile (dual-role included), ascending
    /// by id.
    pub fn list_students(&self) -> Vec<StudentRow> {
        self.members
            .values()
            .filter_map(|member| {
                let profile = member.student.as_ref()?;
                Some(StudentRow {
                    id: member.person.id.to_string(),
                    name: member.person.name.clone(),
                    major: profile.major.clone(),
                    gpa: profile.gpa,
                    status: member.person.status,
                })
            })
            .collect()
    }

    /// Every member with a faculty profile (dual-role included), ascending
    /// by id.
    pub fn list_faculty(&self) -> Vec<FacultyRow> {
        self.members
            .values()
            .filter_map(|member| {
                let profile = member.faculty.as_ref()?;
                Some(FacultyRow {
                    id: member.person.id.to_string(),
                    name: member.person.name.clone(),
                    department: profile.department.clone(),
                    rank: profile.rank,
                    status: member.person.status,
                })
            })
            .collect()
    }

    /// Every course ascending by code, with instructor and roster resolved
    /// to names (roster ascending by student id).
    pub fn list_courses(&self) -> Vec<CourseRow> {
        self.courses
            .values()
            .map(|course| CourseRow {
                code: course.code.to_string(),
                name: course.name.clone(),
                instructor: course
                    .instructor
                    .and_then(|id| self.members.get(&id))
                    .map(|m| m.person.name.clone()),
                students: course
                    .students
                    .iter()
                    .filter_map(|id| self.members.get(id))
                    .map(|m| m.person.name.clone())
                    .collect(),
            })
            .collect()
    }

    /// Courses the student is enrolled in, ascending by code.
    pub fn courses_of_student(&self, student_id: PersonId) -> Result<Vec<&Course>> {
        let member = self
            .members
            .get(&student_id)
            .ok_or_else(|| RegistryError::not_found(format!("person {student_id}")))?;
        let profile = member
            .student
            .as_ref()
            .ok_or_else(|| RegistryError::not_found(format!("student {student_id}")))?;

        Ok(profile
            .enrolled
            .iter()
            .filter_map(|code| self.courses.get(code.as_str()))
            .collect())
    }

    /// Union of the rosters across every course the faculty member teaches,
    /// duplicates removed, ascending by student id.
    pub fn students_of_faculty(&self, faculty_id: PersonId) -> Result<Vec<&Member>> {
        let member = self
            .members
            .get(&faculty_id)
            .ok_or_else(|| RegistryError::not_found(format!("person {faculty_id}")))?;
        let profile = member
            .faculty
            .as_ref()
            .ok_or_else(|| RegistryError::not_found(format!("faculty {faculty_id}")))?;

        let mut ids = BTreeSet::new();
        for code in &profile.taught {
            if let Some(course) = self.courses.get(code.as_str()) {
                ids.extend(course.students.iter().copied());
            }
        }

        Ok(ids
            .into_iter()
            .filter_map(|id| self.members.get(&id))
            .collect())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RegistryError::validation("name must not be empty"));
    }
    Ok(())
}

fn validate_gpa(gpa: f64) -> Result<()> {
    if !(0.0..=4.0).contains(&gpa) {
        return Err(RegistryError::validation(format!(
            "gpa {gpa} outside 0.0..=4.0"
        )));
    }
    Ok(())
}
