//! Contact fields requested from the device contact picker.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One property the contact picker is asked to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Phone,
}

impl ContactField {
    /// Fields every directory refresh requests.
    pub const REQUIRED: [ContactField; 2] = [Self::Name, Self::Phone];

    /// Stable picker property id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => CONTACT_FIELD_NAME,
            Self::Phone => CONTACT_FIELD_TEL,
        }
    }

    /// User-facing short description, shown next to the access prompt.
    pub fn description(self) -> &'static str {
        match self {
            Self::Name => "Read contact display names to fill in who owes you.",
            Self::Phone => "Read contact phone numbers to tell people with the same name apart.",
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picker property id for display names.
pub const CONTACT_FIELD_NAME: &str = "name";
/// Picker property id for telephone numbers.
pub const CONTACT_FIELD_TEL: &str = "tel";

/// Parses one picker property id.
pub fn parse_contact_field(value: &str) -> Result<ContactField, ContactFieldError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ContactFieldError::Empty);
    }

    match normalized {
        CONTACT_FIELD_NAME => Ok(ContactField::Name),
        CONTACT_FIELD_TEL => Ok(ContactField::Phone),
        other => Err(ContactFieldError::Unsupported(other.to_string())),
    }
}

/// Picker property parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldError {
    Empty,
    Unsupported(String),
}

impl Display for ContactFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "contact field must not be empty"),
            Self::Unsupported(value) => write!(f, "contact field is unsupported: {value}"),
        }
    }
}

impl Error for ContactFieldError {}
