//! Multi-tenant address book registry

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::model::{AddressBook, Contact, User};

/// Registry of users keyed by user id, each owning its address books.
///
/// Only [`create_address_book_for_user`](Self::create_address_book_for_user)
/// creates users. Every other operation reports absence (`false`, `None` or an
/// empty set) for an unknown user and never provisions one.
#[derive(Clone, Default)]
pub struct UserAddressBookService {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserAddressBookService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book for a user, provisioning the user on first reference.
    ///
    /// Returns false if the user already owns a book with this name.
    pub async fn create_address_book_for_user(&self, user_id: &str, book_name: &str) -> bool {
        self.create_address_book_with_username(user_id, book_name, None)
            .await
    }

    /// Same as [`create_address_book_for_user`](Self::create_address_book_for_user),
    /// recording `username` if this call provisions the user. An existing
    /// user's name is left untouched.
    pub async fn create_address_book_with_username(
        &self,
        user_id: &str,
        book_name: &str,
        username: Option<String>,
    ) -> bool {
        let mut users = self.users.write().await;
        let user = users.entry(user_id.to_string()).or_insert_with(|| {
            info!("Provisioning user on first address book: {}", user_id);
            User::new(user_id).with_username(username)
        });

        let created = user.create_address_book(book_name);
        if created {
            info!("Created address book {} for user {}", book_name, user_id);
        } else {
            debug!("Address book {} already exists for user {}", book_name, user_id);
        }
        created
    }

    /// Insert a contact into an existing book of an existing user
    pub async fn add_contact_to_address_book(
        &self,
        user_id: &str,
        book_name: &str,
        contact: Contact,
    ) -> bool {
        let mut users = self.users.write().await;
        match book_mut(&mut users, user_id, book_name) {
            Some(book) => {
                debug!("Adding contact {} to {}/{}", contact, user_id, book_name);
                book.add_contact(contact)
            }
            None => false,
        }
    }

    /// Contacts of one book; empty when the user or book does not exist
    pub async fn contacts(&self, user_id: &str, book_name: &str) -> BTreeSet<Contact> {
        let users = self.users.read().await;
        users
            .get(user_id)
            .and_then(|user| user.address_book(book_name))
            .map(|book| book.contacts().clone())
            .unwrap_or_default()
    }

    pub async fn remove_contact_for_user(
        &self,
        user_id: &str,
        book_name: &str,
        contact: &Contact,
    ) -> bool {
        let mut users = self.users.write().await;
        book_mut(&mut users, user_id, book_name)
            .map(|book| book.remove_contact(contact))
            .unwrap_or(false)
    }

    /// Replace `old` with `new` if `old` is present in the user's book
    pub async fn update_contact_for_user(
        &self,
        user_id: &str,
        book_name: &str,
        old: &Contact,
        new: Contact,
    ) -> bool {
        let mut users = self.users.write().await;
        let Some(book) = book_mut(&mut users, user_id, book_name) else {
            return false;
        };
        if !book.contains(old) {
            return false;
        }

        book.remove_contact(old);
        book.add_contact(new);
        info!("Updated contact in {}/{}", user_id, book_name);
        true
    }

    pub async fn remove_address_book_for_user(&self, user_id: &str, book_name: &str) -> bool {
        let mut users = self.users.write().await;
        let removed = users
            .get_mut(user_id)
            .and_then(|user| user.remove_address_book(book_name))
            .is_some();
        if removed {
            info!("Removed address book {} for user {}", book_name, user_id);
        }
        removed
    }

    /// Every book of a user keyed by name, or `None` for an unknown user
    pub async fn all_books(&self, user_id: &str) -> Option<BTreeMap<String, AddressBook>> {
        let users = self.users.read().await;
        users.get(user_id).map(|user| user.address_books().clone())
    }

    /// Union of the user's books, or `None` for an unknown user
    pub async fn unique_contacts(&self, user_id: &str) -> Option<BTreeSet<Contact>> {
        let users = self.users.read().await;
        users.get(user_id).map(|user| {
            user.address_books()
                .values()
                .flat_map(|book| book.contacts().iter().cloned())
                .collect()
        })
    }

    pub async fn user(&self, user_id: &str) -> Option<User> {
        self.users.read().await.get(user_id).cloned()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn book_mut<'a>(
    users: &'a mut HashMap<String, User>,
    user_id: &str,
    book_name: &str,
) -> Option<&'a mut AddressBook> {
    users.get_mut(user_id)?.address_book_mut(book_name)
}
