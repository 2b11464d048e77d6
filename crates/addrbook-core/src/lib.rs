//! addrbook-core: Address book core library
//!
//! 連絡先・アドレス帳・ユーザーのデータモデルと、
//! シングルテナント / マルチテナントのサービスを提供します。

pub mod config;
pub mod error;
pub mod model;
pub mod service;

pub use config::{Config, LogConfig, ServerConfig};
pub use error::{Error, Result};
pub use model::{AddressBook, Contact, FieldError, User, ValidationErrors};
pub use service::{AddressBookService, UserAddressBookService};
