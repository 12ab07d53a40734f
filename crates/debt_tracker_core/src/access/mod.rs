//! Contact-access capability boundary.
//!
//! This module defines the contract of the device contact picker and the
//! normalization applied to whatever it returns. The permission prompt and the
//! picker UI belong to the host platform and stay out of this crate.

pub mod field;
pub mod source;
