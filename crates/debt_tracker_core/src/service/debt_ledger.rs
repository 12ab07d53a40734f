//! Draft editing and append-only debt ledger.
//!
//! # Responsibility
//! - Hold the single draft and apply per-field edits.
//! - Validate and append drafts as immutable records.
//!
//! # Invariants
//! - The record list only grows; records are never edited or removed.
//! - Record ids come from a per-ledger counter and strictly increase.
//! - A failed commit leaves both the draft and the record list untouched.
//! - A successful commit resets the draft to all-empty fields.

use crate::model::debt::{DebtRecord, DebtRecordId, DraftDebtRecord, DraftField, ValidationError};
use log::{debug, info};
use std::mem;

/// Confirmed debts plus the in-progress draft.
#[derive(Debug, Default)]
pub struct DebtLedger {
    draft: DraftDebtRecord,
    records: Vec<DebtRecord>,
    last_id: u64,
}

impl DebtLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft.
    pub fn draft(&self) -> &DraftDebtRecord {
        &self.draft
    }

    /// Replaces exactly one draft field.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
        debug!(
            "event=draft_update module=ledger status=ok field={}",
            field.as_str()
        );
    }

    /// Installs a whole draft, e.g. one projected from a selected contact.
    pub fn replace_draft(&mut self, draft: DraftDebtRecord) {
        self.draft = draft;
    }

    /// Resets the draft to all-empty fields.
    pub fn clear_draft(&mut self) {
        self.draft = DraftDebtRecord::default();
    }

    /// Validates the draft and appends it as a new record.
    ///
    /// # Errors
    /// - `MissingRequiredField` when `name` or `amount` is empty.
    pub fn commit(&mut self) -> Result<DebtRecord, ValidationError> {
        if let Err(err) = self.draft.validate() {
            info!(
                "event=debt_commit module=ledger status=rejected reason={}",
                err_field(&err)
            );
            return Err(err);
        }

        let id = self.next_id();
        let record = DebtRecord::from_draft(id, mem::take(&mut self.draft));
        self.records.push(record.clone());
        info!(
            "event=debt_commit module=ledger status=ok record_id={} total={}",
            id,
            self.records.len()
        );
        Ok(record)
    }

    /// Confirmed records in insertion order.
    pub fn records(&self) -> &[DebtRecord] {
        &self.records
    }

    pub fn get(&self, id: DebtRecordId) -> Option<&DebtRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True while no debt has been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&mut self) -> DebtRecordId {
        self.last_id += 1;
        DebtRecordId::new(self.last_id)
    }
}

fn err_field(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::MissingRequiredField(field) => field.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::DebtLedger;
    use crate::model::debt::{DraftDebtRecord, DraftField, ValidationError};

    #[test]
    fn rejected_commit_keeps_draft_for_correction() {
        let mut ledger = DebtLedger::new();
        ledger.update_draft_field(DraftField::Name, "Bob");
        ledger.update_draft_field(DraftField::DueDate, "2025-03-01");
        let before = ledger.draft().clone();

        let err = ledger.commit().expect_err("amount is missing");
        assert_eq!(
            err,
            ValidationError::MissingRequiredField(DraftField::Amount)
        );
        assert_eq!(ledger.draft(), &before);
        assert!(ledger.is_empty());
    }

    #[test]
    fn ids_increase_across_rapid_commits() {
        let mut ledger = DebtLedger::new();
        let mut ids = Vec::new();
        for amount in ["1", "2", "3"] {
            ledger.update_draft_field(DraftField::Name, "Same");
            ledger.update_draft_field(DraftField::Amount, amount);
            ids.push(ledger.commit().expect("valid draft").id());
        }
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids[0].get(), 1);
    }

    #[test]
    fn clear_and_replace_draft() {
        let mut ledger = DebtLedger::new();
        ledger.replace_draft(DraftDebtRecord {
            name: "Ann".to_string(),
            ..DraftDebtRecord::default()
        });
        assert_eq!(ledger.draft().name, "Ann");
        ledger.clear_draft();
        assert!(ledger.draft().is_empty());
    }
}
