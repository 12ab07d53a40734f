//! Substring filter over contacts.
//!
//! # Invariants
//! - Names match case-insensitively; phones match verbatim.
//! - An empty term matches every contact.
//! - Results keep the input order; nothing is indexed or cached.

use crate::model::contact::Contact;

/// Prepared search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    term: String,
    lowered: String,
}

impl ContactQuery {
    /// Prepares `term` for matching. The term is not trimmed.
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let lowered = term.to_lowercase();
        Self { term, lowered }
    }

    /// Raw term as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Returns whether `contact` satisfies this query.
    pub fn matches(&self, contact: &Contact) -> bool {
        contact.name.to_lowercase().contains(&self.lowered) || contact.phone.contains(&self.term)
    }

    /// Lazily filters `contacts`, preserving their order.
    pub fn filter<'a>(self, contacts: &'a [Contact]) -> impl Iterator<Item = &'a Contact> + 'a {
        contacts
            .iter()
            .filter(move |contact| self.matches(contact))
    }
}
