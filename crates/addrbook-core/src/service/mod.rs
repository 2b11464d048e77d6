//! Address book services
//!
//! Explicit registries created at startup and shared with request handlers.

mod address_book;
mod user;

pub use address_book::AddressBookService;
pub use user::UserAddressBookService;
