//! Application-state controller for the debt form.
//!
//! # Responsibility
//! - Own the contact directory, the ledger and the current search term.
//! - Route form events (search, select, edit, save, refresh) to them.
//!
//! # Invariants
//! - Selecting a contact replaces the whole draft; other edits touch one field.
//! - An unknown contact id leaves the draft untouched.

use crate::access::source::{AccessError, ContactAccess};
use crate::directory::ContactDirectory;
use crate::model::contact::{Contact, ContactId};
use crate::model::debt::{DebtRecord, DraftDebtRecord, DraftField, ValidationError};
use crate::service::debt_ledger::DebtLedger;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Controller-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Selected contact is not in the current directory list.
    ContactNotFound(ContactId),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(id) => write!(f, "contact not found: {id}"),
        }
    }
}

impl Error for TrackerError {}

/// Whole-screen state of the debt tracker.
pub struct DebtTracker {
    directory: ContactDirectory,
    ledger: DebtLedger,
    search_term: String,
}

impl Default for DebtTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DebtTracker {
    /// Creates a tracker over the seed contacts, without device access.
    pub fn new() -> Self {
        Self::with_directory(ContactDirectory::with_seed_contacts())
    }

    /// Creates a tracker over the seed contacts with a device picker attached.
    pub fn with_contact_access(access: Arc<dyn ContactAccess>) -> Self {
        Self::with_directory(ContactDirectory::with_seed_contacts().with_access(access))
    }

    /// Creates a tracker over a caller-built directory.
    pub fn with_directory(directory: ContactDirectory) -> Self {
        Self {
            directory,
            ledger: DebtLedger::new(),
            search_term: String::new(),
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn ledger(&self) -> &DebtLedger {
        &self.ledger
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Stores the term typed into the search box.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Contacts matching the held search term.
    pub fn visible_contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.directory.search(&self.search_term)
    }

    /// Fills the draft from the contact with `id`.
    ///
    /// # Errors
    /// - `ContactNotFound` when `id` is not in the current list.
    pub fn select_contact(&mut self, id: ContactId) -> Result<&DraftDebtRecord, TrackerError> {
        let contact = self
            .directory
            .get(id)
            .ok_or(TrackerError::ContactNotFound(id))?;
        let draft = self.directory.select(contact);
        self.ledger.replace_draft(draft);
        Ok(self.ledger.draft())
    }

    pub fn draft(&self) -> &DraftDebtRecord {
        self.ledger.draft()
    }

    /// Manual edit of one form field.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.ledger.update_draft_field(field, value);
    }

    /// Saves the draft as a debt record.
    ///
    /// # Errors
    /// - `MissingRequiredField` when `name` or `amount` is empty.
    pub fn commit_draft(&mut self) -> Result<DebtRecord, ValidationError> {
        self.ledger.commit()
    }

    /// Confirmed debts in insertion order.
    pub fn records(&self) -> &[DebtRecord] {
        self.ledger.records()
    }

    /// Reloads contacts from the device picker.
    ///
    /// Returns the number of contacts now held.
    ///
    /// # Errors
    /// - See [`ContactDirectory::refresh_from_external_source`].
    pub async fn refresh_contacts(&mut self) -> Result<usize, AccessError> {
        let count = self.directory.refresh_from_external_source().await?.len();
        info!(
            "event=tracker_refresh module=tracker status=ok count={} search_active={}",
            count,
            !self.search_term.is_empty()
        );
        Ok(count)
    }
}
