//! Use-case layer driven by the presentation shell.
//!
//! # Responsibility
//! - Own draft editing and the append-only debt ledger.
//! - Tie the directory and ledger together behind one controller.

pub mod debt_ledger;
pub mod tracker;
