//! Domain model for contacts and debt records.
//!
//! # Responsibility
//! - Define the fixed shapes shared by the directory, ledger and controller.
//! - Keep draft editing separate from confirmed, immutable records.
//!
//! # Invariants
//! - A `Contact` is never mutated after it enters a directory.
//! - A `DebtRecord` only exists when its `name` and `amount` are non-empty.

pub mod contact;
pub mod debt;
