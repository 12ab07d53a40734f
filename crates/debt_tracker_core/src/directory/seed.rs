//! Built-in sample contacts shown before any device refresh.

use crate::model::contact::Contact;
use uuid::Uuid;

const SEED: [(u128, &str, &str); 4] = [
    (1, "John Doe", "+1 (555) 123-4567"),
    (2, "Jane Smith", "+1 (555) 987-6543"),
    (3, "Alice Johnson", "+1 (555) 246-8135"),
    (4, "Bob Williams", "+1 (555) 369-2580"),
];

/// Returns the fixed seed contacts with stable ids.
pub fn seed_contacts() -> Vec<Contact> {
    SEED.iter()
        .map(|(id, name, phone)| Contact::with_id(Uuid::from_u128(*id), *name, *phone))
        .collect()
}
