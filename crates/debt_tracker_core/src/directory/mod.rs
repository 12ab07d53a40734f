//! Selectable contact list.
//!
//! # Responsibility
//! - Hold the ordered contact list (seed data or device contacts).
//! - Refresh the list from an injected contact-access capability.
//! - Project a chosen contact into a fresh draft.
//!
//! # Invariants
//! - The held list is replaced wholesale, never edited in place.
//! - A failed refresh leaves the held list exactly as it was.
//! - Searching and selecting never mutate the held list.

mod seed;

pub use seed::seed_contacts;

use crate::access::field::ContactField;
use crate::access::source::{normalize_entries, AccessError, ContactAccess};
use crate::model::contact::{Contact, ContactId};
use crate::model::debt::DraftDebtRecord;
use crate::search::contact_filter::ContactQuery;
use log::{info, warn};
use std::sync::Arc;

/// Ordered contact list with an optional device picker behind it.
#[derive(Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
    access: Option<Arc<dyn ContactAccess>>,
}

impl ContactDirectory {
    /// Creates an empty directory without contact access.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding the built-in seed contacts.
    pub fn with_seed_contacts() -> Self {
        let mut directory = Self::new();
        directory.load(seed_contacts());
        directory
    }

    /// Attaches the device contact picker used by refreshes.
    pub fn with_access(mut self, access: Arc<dyn ContactAccess>) -> Self {
        self.access = Some(access);
        self
    }

    /// Whether a contact picker is available.
    pub fn has_access(&self) -> bool {
        self.access.is_some()
    }

    /// Replaces the held list with `initial`.
    pub fn load(&mut self, initial: Vec<Contact>) {
        self.contacts = initial;
    }

    /// Pulls contacts from the device picker and replaces the held list.
    ///
    /// The list is only swapped once every entry has been normalized.
    ///
    /// # Errors
    /// - `Unsupported` when no picker is attached.
    /// - Picker failures (`PermissionDenied`, `Unknown`) are passed through.
    /// - `MalformedEntry` when an entry lacks a name or phone.
    pub async fn refresh_from_external_source(&mut self) -> Result<&[Contact], AccessError> {
        let Some(access) = self.access.clone() else {
            warn!("event=contacts_refresh module=directory status=error code=unsupported");
            return Err(AccessError::Unsupported);
        };

        let refreshed = match access.select_contacts(&ContactField::REQUIRED).await {
            Ok(entries) => normalize_entries(&entries),
            Err(err) => Err(err),
        };

        match refreshed {
            Ok(contacts) => {
                info!(
                    "event=contacts_refresh module=directory status=ok count={} previous={}",
                    contacts.len(),
                    self.contacts.len()
                );
                self.contacts = contacts;
                Ok(self.contacts.as_slice())
            }
            Err(err) => {
                warn!(
                    "event=contacts_refresh module=directory status=error code={} kept={}",
                    err.code(),
                    self.contacts.len()
                );
                Err(err)
            }
        }
    }

    /// Lazily yields contacts matching `term`, in held order.
    ///
    /// Recomputed from the full list on every call.
    pub fn search(&self, term: &str) -> impl Iterator<Item = &Contact> + '_ {
        ContactQuery::new(term).filter(&self.contacts)
    }

    /// Projects `contact` into a draft with empty amount and due date.
    pub fn select(&self, contact: &Contact) -> DraftDebtRecord {
        DraftDebtRecord {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            ..DraftDebtRecord::default()
        }
    }

    /// Held contacts in load order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
