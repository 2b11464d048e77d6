//! Single-tenant address book registry (legacy API)

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::model::{AddressBook, Contact};

/// Global registry of address books keyed by name.
///
/// Every mutation holds the write guard for its whole read-modify-write, so
/// concurrent requests are serialized rather than racing.
#[derive(Clone, Default)]
pub struct AddressBookService {
    books: Arc<RwLock<BTreeMap<String, AddressBook>>>,
}

impl AddressBookService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new empty book.
    ///
    /// Returns `None` when the name is blank or already registered.
    pub async fn create_address_book(&self, name: &str) -> Option<AddressBook> {
        if name.trim().is_empty() {
            debug!("Rejected address book with blank name");
            return None;
        }

        let mut books = self.books.write().await;
        if books.contains_key(name) {
            debug!("Address book already exists: {}", name);
            return None;
        }

        let book = AddressBook::new(name);
        books.insert(name.to_string(), book.clone());
        info!("Created address book: {}", name);
        Some(book)
    }

    pub async fn address_book(&self, name: &str) -> Option<AddressBook> {
        self.books.read().await.get(name).cloned()
    }

    /// All books, ordered by name
    pub async fn all_books(&self) -> Vec<AddressBook> {
        self.books.read().await.values().cloned().collect()
    }

    pub async fn remove_address_book(&self, name: &str) -> bool {
        let removed = self.books.write().await.remove(name).is_some();
        if removed {
            info!("Removed address book: {}", name);
        }
        removed
    }

    /// Insert a contact, creating the book on demand
    pub async fn add_contact(&self, book_name: &str, contact: Contact) {
        let mut books = self.books.write().await;
        let book = books
            .entry(book_name.to_string())
            .or_insert_with(|| AddressBook::new(book_name));
        debug!("Adding contact {} to {}", contact, book_name);
        book.add_contact(contact);
    }

    /// Remove a contact by equality. No-op when the book or contact is absent.
    pub async fn remove_contact(&self, book_name: &str, contact: &Contact) -> bool {
        let mut books = self.books.write().await;
        match books.get_mut(book_name) {
            Some(book) => book.remove_contact(contact),
            None => false,
        }
    }

    /// Replace `old` with `new` if `old` is present in the book.
    ///
    /// If `new` equals another contact already in the book the two collapse.
    pub async fn update_contact(&self, book_name: &str, old: &Contact, new: Contact) -> bool {
        let mut books = self.books.write().await;
        let Some(book) = books.get_mut(book_name) else {
            return false;
        };
        if !book.contains(old) {
            return false;
        }

        book.remove_contact(old);
        book.add_contact(new);
        info!("Updated contact in address book: {}", book_name);
        true
    }

    /// Union of every book's contacts, deduplicated by equality
    pub async fn unique_contacts(&self) -> BTreeSet<Contact> {
        let books = self.books.read().await;
        books
            .values()
            .flat_map(|book| book.contacts().iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str) -> Contact {
        Contact::new(name, phone).unwrap()
    }

    #[tokio::test]
    async fn test_create_address_book() {
        let service = AddressBookService::new();

        let book = service.create_address_book("Friends").await.unwrap();
        assert_eq!(book.name, "Friends");
        assert!(book.is_empty());

        assert!(service.create_address_book("Friends").await.is_none());
        assert!(service.create_address_book("").await.is_none());
        assert!(service.create_address_book("  ").await.is_none());
    }

    #[tokio::test]
    async fn test_add_contact_creates_book() {
        let service = AddressBookService::new();
        service.add_contact("Family", contact("Anna", "1234567890")).await;

        let book = service.address_book("Family").await.unwrap();
        assert_eq!(book.len(), 1);
    }

    #[tokio::test]
    async fn test_add_same_contact_is_idempotent() {
        let service = AddressBookService::new();
        service.add_contact("Family", contact("Anna", "1234567890")).await;
        service.add_contact("Family", contact("Anna", "1234567890")).await;

        assert_eq!(service.address_book("Family").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_contact() {
        let service = AddressBookService::new();
        let anna = contact("Anna", "1234567890");

        assert!(!service.remove_contact("Family", &anna).await);

        service.add_contact("Family", anna.clone()).await;
        assert!(service.remove_contact("Family", &anna).await);
        assert!(!service.remove_contact("Family", &anna).await);
        assert!(service.address_book("Family").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_contact() {
        let service = AddressBookService::new();
        let old = contact("Jake", "1234567890");
        let new = contact("Jake", "1234567899");
        service.add_contact("Family", old.clone()).await;

        assert!(service.update_contact("Family", &old, new.clone()).await);

        let book = service.address_book("Family").await.unwrap();
        assert!(!book.contains(&old));
        assert!(book.contains(&new));
    }

    #[tokio::test]
    async fn test_update_missing_contact_leaves_book_unchanged() {
        let service = AddressBookService::new();
        let kept = contact("Kept", "1234567890");
        service.add_contact("Work", kept.clone()).await;
        let before = service.address_book("Work").await.unwrap();

        let ghost = contact("Ghost", "1234567890");
        assert!(!service.update_contact("Work", &ghost, contact("Ghost", "1234567899")).await);
        assert!(!service.update_contact("Missing", &kept, contact("Ghost", "1234567899")).await);

        assert_eq!(service.address_book("Work").await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_into_existing_contact_collapses() {
        let service = AddressBookService::new();
        let a = contact("Anna", "1234567890");
        let b = contact("Ben", "1234567890");
        service.add_contact("Work", a.clone()).await;
        service.add_contact("Work", b.clone()).await;

        assert!(service.update_contact("Work", &a, b.clone()).await);
        let book = service.address_book("Work").await.unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.contains(&b));
    }

    #[tokio::test]
    async fn test_unique_contacts_across_books() {
        let service = AddressBookService::new();
        let shared = contact("Anna", "1234567890");
        service.add_contact("Work", shared.clone()).await;
        service.add_contact("Family", shared.clone()).await;
        service.add_contact("Family", contact("Ben", "1234567890")).await;

        let unique = service.unique_contacts().await;
        assert_eq!(unique.len(), 2);
        assert_eq!(unique.iter().filter(|c| **c == shared).count(), 1);
    }

    #[tokio::test]
    async fn test_remove_address_book() {
        let service = AddressBookService::new();
        service.create_address_book("Friends").await;

        assert!(service.remove_address_book("Friends").await);
        assert!(!service.remove_address_book("Friends").await);
        assert!(service.all_books().await.is_empty());
    }

    #[tokio::test]
    async fn test_all_books_ordered_by_name() {
        let service = AddressBookService::new();
        service.create_address_book("Work").await;
        service.create_address_book("Family").await;

        let names: Vec<_> = service.all_books().await.into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Family", "Work"]);
    }
}
