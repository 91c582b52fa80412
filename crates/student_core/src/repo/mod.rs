//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the student data-access contract.
//! - Keep SQL statements inside the persistence boundary.
//!
//! # Invariants
//! - Each operation runs exactly one statement on its own connection.
//! - Storage faults are logged and surfaced unchanged, never folded into `false`.

pub mod student_repo;
