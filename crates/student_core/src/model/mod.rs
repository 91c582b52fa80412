//! Domain model for student records.
//!
//! # Responsibility
//! - Define the plain data holder persisted by the repository layer.
//!
//! # Invariants
//! - A `StudentId` identifies at most one stored row.

pub mod student;
