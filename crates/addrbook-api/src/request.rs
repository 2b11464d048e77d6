//! Request payloads and their validation

use addrbook_core::{Contact, ValidationErrors};
use serde::Deserialize;

/// Payloads that must pass field validation before reaching a handler
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

/// Contact body: `{"name": "...", "phone": "..."}`
///
/// Missing fields deserialize as empty strings so that they are reported
/// by field validation rather than as malformed JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl Validate for ContactRequest {
    type Output = Contact;

    fn validate(self) -> Result<Contact, ValidationErrors> {
        Contact::new(self.name, self.phone)
    }
}

/// Update body: `{"oldContact": {...}, "newContact": {...}}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub old_contact: ContactRequest,
    #[serde(default)]
    pub new_contact: ContactRequest,
}

/// A validated contact replacement
#[derive(Debug, Clone)]
pub struct ContactUpdate {
    pub old_contact: Contact,
    pub new_contact: Contact,
}

impl Validate for UpdateContactRequest {
    type Output = ContactUpdate;

    fn validate(self) -> Result<ContactUpdate, ValidationErrors> {
        let old = self.old_contact.validate();
        let new = self.new_contact.validate();

        match (old, new) {
            (Ok(old_contact), Ok(new_contact)) => Ok(ContactUpdate {
                old_contact,
                new_contact,
            }),
            (old, new) => {
                let mut errors = ValidationErrors::new();
                if let Err(e) = old {
                    errors.merge(e.with_prefix("oldContact"));
                }
                if let Err(e) = new {
                    errors.merge(e.with_prefix("newContact"));
                }
                Err(errors)
            }
        }
    }
}
