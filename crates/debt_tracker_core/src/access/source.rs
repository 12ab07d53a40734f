//! Contact-access capability contract and boundary normalization.
//!
//! # Responsibility
//! - Define the async trait hosts implement over their contact picker.
//! - Convert raw, possibly multi-valued picker entries into `Contact`s.
//!
//! # Invariants
//! - Normalization is all-or-nothing: one malformed entry fails the batch.
//! - The first value of each multi-valued property wins; the rest are dropped.
//! - Raw values are copied verbatim (no trimming or phone formatting).

use crate::access::field::ContactField;
use crate::model::contact::Contact;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Device contact picker as seen by the directory.
///
/// Hosts without a picker simply do not inject one; the directory then
/// reports [`AccessError::Unsupported`].
#[async_trait]
pub trait ContactAccess: Send + Sync {
    /// Asks the user to pick contacts, returning the requested properties.
    ///
    /// # Errors
    /// - `PermissionDenied` when the user or platform refuses access.
    /// - `Unknown` for any other picker failure.
    async fn select_contacts(
        &self,
        fields: &[ContactField],
    ) -> Result<Vec<RawContactEntry>, AccessError>;
}

/// One entry exactly as the picker hands it over.
///
/// Every property may be missing or carry several values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContactEntry {
    #[serde(default)]
    pub name: Option<Vec<String>>,
    #[serde(default)]
    pub tel: Option<Vec<String>>,
}

impl RawContactEntry {
    /// Builds an entry with one value per property.
    pub fn single(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            name: Some(vec![name.into()]),
            tel: Some(vec![tel.into()]),
        }
    }

    fn first_value(&self, field: ContactField) -> Option<&str> {
        let values = match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Phone => self.tel.as_deref(),
        };
        values.and_then(|values| values.first()).map(String::as_str)
    }
}

/// Contact refresh failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No contact picker is available on this host.
    Unsupported,
    /// The user or platform refused access.
    PermissionDenied,
    /// The picker failed for another reason.
    Unknown(String),
    /// Picker returned an entry without a required property.
    MalformedEntry { index: usize, field: ContactField },
}

impl AccessError {
    /// Short notice suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unsupported => "Contact access is not supported on this device.",
            Self::PermissionDenied | Self::Unknown(_) | Self::MalformedEntry { .. } => {
                "Could not access contacts. Please check permissions."
            }
        }
    }

    /// Stable metadata code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unsupported => "unsupported",
            Self::PermissionDenied => "permission_denied",
            Self::Unknown(_) => "unknown",
            Self::MalformedEntry { .. } => "malformed_entry",
        }
    }
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "contact access is not supported"),
            Self::PermissionDenied => write!(f, "contact access permission denied"),
            Self::Unknown(details) => write!(f, "contact access failed: {details}"),
            Self::MalformedEntry { index, field } => {
                write!(f, "contact entry {index} has no `{field}` value")
            }
        }
    }
}

impl Error for AccessError {}

/// Normalizes raw picker entries into directory contacts.
///
/// Each contact receives a freshly generated id.
///
/// # Errors
/// - Returns `MalformedEntry` for the first entry missing a name or phone.
pub fn normalize_entries(entries: &[RawContactEntry]) -> Result<Vec<Contact>, AccessError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<Contact, AccessError> {
            let name = required_value(entry, index, ContactField::Name)?;
            let phone = required_value(entry, index, ContactField::Phone)?;
            Ok(Contact::new(name, phone))
        })
        .collect()
}

fn required_value(
    entry: &RawContactEntry,
    index: usize,
    field: ContactField,
) -> Result<&str, AccessError> {
    entry
        .first_value(field)
        .ok_or(AccessError::MalformedEntry { index, field })
}
