use async_trait::async_trait;
use debt_tracker_core::{
    seed_contacts, AccessError, Contact, ContactAccess, ContactDirectory, ContactField,
    RawContactEntry,
};
use futures::executor::block_on;
use std::sync::{Arc, Mutex};

struct StaticPicker {
    entries: Vec<RawContactEntry>,
    requested: Mutex<Vec<ContactField>>,
}

impl StaticPicker {
    fn new(entries: Vec<RawContactEntry>) -> Self {
        Self {
            entries,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContactAccess for StaticPicker {
    async fn select_contacts(
        &self,
        fields: &[ContactField],
    ) -> Result<Vec<RawContactEntry>, AccessError> {
        self.requested.lock().unwrap().extend_from_slice(fields);
        Ok(self.entries.clone())
    }
}

struct FailingPicker(AccessError);

#[async_trait]
impl ContactAccess for FailingPicker {
    async fn select_contacts(
        &self,
        _fields: &[ContactField],
    ) -> Result<Vec<RawContactEntry>, AccessError> {
        Err(self.0.clone())
    }
}

fn two_contact_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    directory.load(vec![
        Contact::new("John Doe", "+1 555 123 4567"),
        Contact::new("Jane Smith", "+1 555 987 6543"),
    ]);
    directory
}

#[test]
fn search_matches_name_case_insensitively_and_phone_verbatim() {
    let directory = two_contact_directory();

    let by_name: Vec<&str> = directory
        .search("jane")
        .map(|contact| contact.name.as_str())
        .collect();
    assert_eq!(by_name, vec!["Jane Smith"]);

    let by_phone: Vec<&str> = directory
        .search("987 65")
        .map(|contact| contact.name.as_str())
        .collect();
    assert_eq!(by_phone, vec!["Jane Smith"]);

    assert_eq!(directory.search("DOE").count(), 1);
    assert_eq!(directory.search("nobody").count(), 0);
}

#[test]
fn every_search_result_satisfies_the_match_rule() {
    let directory = ContactDirectory::with_seed_contacts();
    for term in ["", "a", "J", "son", "555", "(555) 2", "-", "x"] {
        let lowered = term.to_lowercase();
        for contact in directory.search(term) {
            assert!(
                contact.name.to_lowercase().contains(&lowered) || contact.phone.contains(term),
                "unexpected hit {} for `{term}`",
                contact.name
            );
        }
        let expected = directory
            .contacts()
            .iter()
            .filter(|contact| {
                contact.name.to_lowercase().contains(&lowered) || contact.phone.contains(term)
            })
            .count();
        assert_eq!(directory.search(term).count(), expected);
    }
}

#[test]
fn empty_search_returns_all_contacts_in_load_order() {
    let directory = ContactDirectory::with_seed_contacts();
    let all: Vec<Contact> = directory.search("").cloned().collect();
    assert_eq!(all, seed_contacts());
}

#[test]
fn select_does_not_mutate_directory() {
    let directory = ContactDirectory::with_seed_contacts();
    let before = directory.contacts().to_vec();

    let contact = directory.search("alice").next().expect("Alice is seeded");
    let draft = directory.select(contact);

    assert_eq!(draft.name, "Alice Johnson");
    assert_eq!(draft.phone, "+1 (555) 246-8135");
    assert_eq!(directory.contacts(), before.as_slice());
}

#[test]
fn refresh_replaces_list_with_normalized_entries() {
    let picker = Arc::new(StaticPicker::new(vec![
        RawContactEntry {
            name: Some(vec!["Carol".to_string(), "Caz".to_string()]),
            tel: Some(vec!["+49 30 1234".to_string(), "+49 30 9999".to_string()]),
        },
        RawContactEntry::single("Dan", "+33 1 0000"),
    ]));
    let mut directory = ContactDirectory::with_seed_contacts().with_access(picker.clone());
    assert!(directory.has_access());

    let refreshed = block_on(directory.refresh_from_external_source())
        .expect("refresh should succeed")
        .to_vec();

    assert_eq!(refreshed.len(), 2);
    assert_eq!(refreshed[0].name, "Carol");
    assert_eq!(refreshed[0].phone, "+49 30 1234");
    assert_eq!(refreshed[1].name, "Dan");
    assert_eq!(directory.contacts(), refreshed.as_slice());
    assert_eq!(
        *picker.requested.lock().unwrap(),
        vec![ContactField::Name, ContactField::Phone]
    );
}

#[test]
fn refresh_without_capability_is_unsupported_and_keeps_seed() {
    let mut directory = ContactDirectory::with_seed_contacts();
    let err = block_on(directory.refresh_from_external_source())
        .expect_err("no capability attached");
    assert_eq!(err, AccessError::Unsupported);
    assert_eq!(directory.contacts(), seed_contacts().as_slice());
}

#[test]
fn refresh_failures_keep_prior_list() {
    for failure in [
        AccessError::PermissionDenied,
        AccessError::Unknown("picker closed".to_string()),
    ] {
        let mut directory = ContactDirectory::with_seed_contacts()
            .with_access(Arc::new(FailingPicker(failure.clone())));
        let err = block_on(directory.refresh_from_external_source())
            .expect_err("picker failure should surface");
        assert_eq!(err, failure);
        assert!(!err.user_message().is_empty());
        assert_eq!(directory.contacts(), seed_contacts().as_slice());
    }
}

#[test]
fn refresh_with_malformed_entry_is_all_or_nothing() {
    let picker = Arc::new(StaticPicker::new(vec![
        RawContactEntry::single("Eve", "+1 202 555 0100"),
        RawContactEntry {
            name: None,
            tel: Some(vec!["+1 202 555 0101".to_string()]),
        },
    ]));
    let mut directory = ContactDirectory::with_seed_contacts().with_access(picker);

    let err = block_on(directory.refresh_from_external_source())
        .expect_err("nameless entry should fail the refresh");
    assert_eq!(
        err,
        AccessError::MalformedEntry {
            index: 1,
            field: ContactField::Name
        }
    );
    assert_eq!(directory.contacts(), seed_contacts().as_slice());
}
