//! Sequential id issuance for university members.

use crate::models::{PersonId, RoleTag};

/// Issues role-tagged person ids: `S1`, `S2`, ... for students, `F1`, ...
/// for faculty, `D1`, ... for dual-role members.
///
/// Sequences are per-tag so ids stay dense within a role. Issued ids are
/// never reused.
#[derive(Debug, Default, Clone)]
pub struct IdGen {
    students: u32,
    faculty: u32,
    dual: u32,
}

impl IdGen {
    pub fn next(&mut self, tag: RoleTag) -> PersonId {
        let counter = match tag {
            RoleTag::Student => &mut self.students,
            RoleTag::Faculty => &mut self.faculty,
            RoleTag::DualRole => &mut self.dual,
        };
        *counter += 1;
        PersonId::new(tag, *counter)
    }
}
