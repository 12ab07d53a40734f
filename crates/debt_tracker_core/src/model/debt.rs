//! Draft and confirmed debt records.
//!
//! # Responsibility
//! - Define the single mutable draft edited by the form.
//! - Define the immutable record appended to the ledger on commit.
//! - Own the required-field validation rule shared by all commit paths.
//!
//! # Invariants
//! - Only `name` and `amount` are required; `phone` and `due_date` may be empty.
//! - Amount and due date are kept as entered; no numeric or calendar checks.
//! - `DebtRecordId` values are assigned by the ledger, never by callers.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Editable field of a [`DraftDebtRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    Phone,
    Amount,
    DueDate,
}

/// Stable string id for the name field.
pub const DRAFT_FIELD_NAME: &str = "name";
/// Stable string id for the phone field.
pub const DRAFT_FIELD_PHONE: &str = "phone";
/// Stable string id for the amount field.
pub const DRAFT_FIELD_AMOUNT: &str = "amount";
/// Stable string id for the due date field.
pub const DRAFT_FIELD_DUE_DATE: &str = "due_date";
const DRAFT_FIELD_DUE_DATE_ALIAS: &str = "dueDate";

impl DraftField {
    /// Every editable field, in form order.
    pub const ALL: [DraftField; 4] = [Self::Name, Self::Phone, Self::Amount, Self::DueDate];

    /// Stable string id used by form bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => DRAFT_FIELD_NAME,
            Self::Phone => DRAFT_FIELD_PHONE,
            Self::Amount => DRAFT_FIELD_AMOUNT,
            Self::DueDate => DRAFT_FIELD_DUE_DATE,
        }
    }

    /// User-facing field label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Amount => "Amount Owed",
            Self::DueDate => "Due Date",
        }
    }

    /// Whether commit requires this field to be non-empty.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Amount)
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one draft field from its form binding id.
///
/// Accepts `dueDate` as an alias of `due_date`.
pub fn parse_draft_field(value: &str) -> Result<DraftField, DraftFieldError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(DraftFieldError::Empty);
    }

    match normalized {
        DRAFT_FIELD_NAME => Ok(DraftField::Name),
        DRAFT_FIELD_PHONE => Ok(DraftField::Phone),
        DRAFT_FIELD_AMOUNT => Ok(DraftField::Amount),
        DRAFT_FIELD_DUE_DATE | DRAFT_FIELD_DUE_DATE_ALIAS => Ok(DraftField::DueDate),
        other => Err(DraftFieldError::Unsupported(other.to_string())),
    }
}

/// Draft field id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftFieldError {
    Empty,
    Unsupported(String),
}

impl Display for DraftFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "draft field id must not be empty"),
            Self::Unsupported(value) => write!(f, "draft field is unsupported: {value}"),
        }
    }
}

impl Error for DraftFieldError {}

/// Commit-time validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty; carries the first offending field.
    MissingRequiredField(DraftField),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => {
                write!(f, "required field is missing: {}", field.label())
            }
        }
    }
}

impl Error for ValidationError {}

/// In-progress debt entry. Exactly one exists per ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftDebtRecord {
    pub name: String,
    pub phone: String,
    /// Numeric text as typed by the user.
    pub amount: String,
    /// Date text as typed by the user.
    pub due_date: String,
}

impl DraftDebtRecord {
    /// Returns the current value of one field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Phone => &self.phone,
            DraftField::Amount => &self.amount,
            DraftField::DueDate => &self.due_date,
        }
    }

    /// Replaces exactly one field, leaving the others untouched.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Phone => &mut self.phone,
            DraftField::Amount => &mut self.amount,
            DraftField::DueDate => &mut self.due_date,
        };
        *slot = value.into();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        DraftField::ALL
            .iter()
            .all(|field| self.field(*field).is_empty())
    }

    /// Checks required fields in form order.
    ///
    /// # Errors
    /// - Returns `MissingRequiredField` naming the first empty required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match DraftField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.field(*field).is_empty())
        {
            Some(field) => Err(ValidationError::MissingRequiredField(field)),
            None => Ok(()),
        }
    }
}

/// Ledger-assigned identifier for a confirmed debt record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebtRecordId(u64);

impl DebtRecordId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for DebtRecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Confirmed debt entry. Immutable once appended.
///
/// Serialize-only; records are created by [`crate::DebtLedger::commit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebtRecord {
    id: DebtRecordId,
    name: String,
    phone: String,
    amount: String,
    due_date: String,
}

impl DebtRecord {
    pub(crate) fn from_draft(id: DebtRecordId, draft: DraftDebtRecord) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            amount: draft.amount,
            due_date: draft.due_date,
        }
    }

    pub fn id(&self) -> DebtRecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Returns whether this record carries the same field values as `draft`.
    pub fn matches_draft(&self, draft: &DraftDebtRecord) -> bool {
        self.name == draft.name
            && self.phone == draft.phone
            && self.amount == draft.amount
            && self.due_date == draft.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_draft_field, DraftDebtRecord, DraftField, DraftFieldError, ValidationError};

    #[test]
    fn parses_all_draft_field_ids() {
        for field in DraftField::ALL {
            assert_eq!(
                parse_draft_field(field.as_str()).expect("known field id"),
                field
            );
        }
        assert_eq!(
            parse_draft_field("dueDate").expect("alias should parse"),
            DraftField::DueDate
        );
    }

    #[test]
    fn rejects_empty_and_unknown_field_ids() {
        assert_eq!(
            parse_draft_field("  ").expect_err("blank must fail"),
            DraftFieldError::Empty
        );
        assert_eq!(
            parse_draft_field("Amount").expect_err("field ids are case-sensitive"),
            DraftFieldError::Unsupported("Amount".to_string())
        );
    }

    #[test]
    fn set_field_touches_only_the_target() {
        let mut draft = DraftDebtRecord {
            name: "Jane".to_string(),
            phone: "123".to_string(),
            amount: String::new(),
            due_date: "2025-01-01".to_string(),
        };
        draft.set_field(DraftField::Amount, "42");

        assert_eq!(draft.name, "Jane");
        assert_eq!(draft.phone, "123");
        assert_eq!(draft.amount, "42");
        assert_eq!(draft.due_date, "2025-01-01");
    }

    #[test]
    fn validate_reports_name_before_amount() {
        let draft = DraftDebtRecord::default();
        assert!(draft.is_empty());
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingRequiredField(DraftField::Name))
        );

        let mut named = draft.clone();
        named.set_field(DraftField::Name, "Bob");
        assert_eq!(
            named.validate(),
            Err(ValidationError::MissingRequiredField(DraftField::Amount))
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut draft = DraftDebtRecord::default();
        draft.set_field(DraftField::Name, " ");
        draft.set_field(DraftField::Amount, " ");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn validation_error_names_the_missing_field() {
        let message = ValidationError::MissingRequiredField(DraftField::Amount).to_string();
        assert!(message.contains("Amount Owed"));
    }
}
