//! Core state layer for the personal debt tracker.
//! This crate owns the contact directory, the draft/ledger invariants and the
//! controller that presentation layers drive.

pub mod access;
pub mod directory;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use access::field::{parse_contact_field, ContactField, ContactFieldError};
pub use access::source::{normalize_entries, AccessError, ContactAccess, RawContactEntry};
pub use directory::{seed_contacts, ContactDirectory};
pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::contact::{Contact, ContactId};
pub use model::debt::{
    parse_draft_field, DebtRecord, DebtRecordId, DraftDebtRecord, DraftField, DraftFieldError,
    ValidationError,
};
pub use search::contact_filter::ContactQuery;
pub use service::debt_ledger::DebtLedger;
pub use service::tracker::{DebtTracker, TrackerError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
