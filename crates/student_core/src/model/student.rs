//! Student domain model.
//!
//! # Responsibility
//! - Hold one student's identifier and name fields.
//! - Provide structural equality and a stable display form.
//!
//! # Invariants
//! - `student_id` is caller-assigned and acts as the storage key.
//! - No validation happens at construction; zero ids and empty names are
//!   representable.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-assigned primary key of a student row.
pub type StudentId = i32;

/// Canonical student record.
///
/// The repository never mutates an instance in place; updates go straight to
/// storage, so a held record does not observe them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    /// Creates a record from its three fields.
    pub fn new(
        student_id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            student_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Student [student_id={}, first_name={}, last_name={}]",
            self.student_id, self.first_name, self.last_name
        )
    }
}
