//! Address book data model
//!
//! Contacts, address books and users. All types are plain values; the
//! services in [`crate::service`] own them and hand out snapshots.

mod address_book;
mod contact;
mod user;

pub use address_book::AddressBook;
pub use contact::{Contact, FieldError, ValidationErrors, NAME_MAX_LEN, NAME_MIN_LEN};
pub use user::User;
