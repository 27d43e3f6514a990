//! Domain models for the campus registry.
//!
//! # Core Concepts
//!
//! ## Members
//!
//! - [`Person`]: the identity core (id, name, age, status) shared by every
//!   university member. Never registered on its own.
//! - [`StudentProfile`] / [`FacultyProfile`]: role-specific data. A
//!   [`Member`] combines one person with one or both profiles; holding both
//!   is the dual-role (part-time) case.
//!
//! ## Courses
//!
//! - [`Course`]: an offering keyed by [`CourseCode`], with an optional
//!   instructor and a roster of enrolled students.
//!
//! The relationship fields (roster ↔ `enrolled`, `instructor` ↔ `taught`)
//! are mirrored pairs. They are mutated only through
//! [`crate::registry::University`], which updates both sides of a
//! relationship or neither.

mod course;
mod faculty;
mod member;
mod person;
mod student;

pub use course::*;
pub use faculty::*;
pub use member::*;
pub use person::*;
pub use student::*;
