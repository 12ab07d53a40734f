//! Contact search entry points.
//!
//! # Responsibility
//! - Match a typed search term against the held contact list.
//! - Keep matching rules in one place so every list view filters alike.

pub mod contact_filter;
