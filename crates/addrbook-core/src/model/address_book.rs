//! Address book types

use serde::Serialize;
use std::collections::BTreeSet;

use super::Contact;

/// A named set of contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    /// Book name, unique within its owner
    pub name: String,
    /// Contacts, unique by (name, phone)
    contacts: BTreeSet<Contact>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: BTreeSet::new(),
        }
    }

    /// Insert a contact. Re-adding an equal contact leaves the set unchanged.
    pub fn add_contact(&mut self, contact: Contact) -> bool {
        self.contacts.insert(contact);
        true
    }

    /// Remove a contact by equality, returning whether it was present
    pub fn remove_contact(&mut self, contact: &Contact) -> bool {
        self.contacts.remove(contact)
    }

    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.contains(contact)
    }

    pub fn contacts(&self) -> &BTreeSet<Contact> {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
