//! User types

use serde::Serialize;
use std::collections::BTreeMap;

use super::AddressBook;

/// A tenant owning a set of uniquely named address books
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: Option<String>,
    address_books: BTreeMap<String, AddressBook>,
}

impl User {
    /// Create a user with no address books
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: None,
            address_books: BTreeMap::new(),
        }
    }

    /// Builder: set the optional display name
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Register an empty book. Returns false if the name is already taken.
    pub fn create_address_book(&mut self, name: &str) -> bool {
        if self.address_books.contains_key(name) {
            return false;
        }
        self.address_books
            .insert(name.to_string(), AddressBook::new(name));
        true
    }

    pub fn address_book(&self, name: &str) -> Option<&AddressBook> {
        self.address_books.get(name)
    }

    pub fn address_book_mut(&mut self, name: &str) -> Option<&mut AddressBook> {
        self.address_books.get_mut(name)
    }

    pub fn address_books(&self) -> &BTreeMap<String, AddressBook> {
        &self.address_books
    }

    /// Drop a book together with all of its contacts
    pub fn remove_address_book(&mut self, name: &str) -> Option<AddressBook> {
        self.address_books.remove(name)
    }
}
