//! Contact value type and field validation

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Minimum name length in characters
pub const NAME_MIN_LEN: usize = 2;
/// Maximum name length in characters
pub const NAME_MAX_LEN: usize = 100;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field rules that failed for one payload, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: &'static str) {
        self.errors.push(FieldError {
            field: field.into(),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Qualify every field name with `prefix`, e.g. `oldContact.name`
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        for err in &mut self.errors {
            err.field = format!("{}.{}", prefix, err.field);
        }
        self
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A phone-book entry.
///
/// Two contacts are equal iff both `name` and `phone` match exactly; identity
/// plays no part. Contacts are immutable after construction, so an "update"
/// is always a removal of the old value followed by an insertion of the new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Contact {
    name: String,
    phone: String,
}

impl Contact {
    /// Validate both fields and build a contact.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Result<Self, ValidationErrors> {
        let name = name.into();
        let phone = phone.into();

        let errors = Self::check(&name, &phone);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self { name, phone })
    }

    /// Run every field rule, collecting all failures
    pub fn check(name: &str, phone: &str) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if name.trim().is_empty() {
            errors.push("name", "Name cannot be empty");
        }
        let len = name.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            errors.push("name", "Name must be between 2 and 100 characters");
        }

        if phone.trim().is_empty() {
            errors.push("phone", "Phone number cannot be empty");
        }
        if !PHONE_PATTERN.is_match(phone) {
            errors.push("phone", "Phone number must be 10 digits");
        }

        errors
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_contact() {
        let contact = Contact::new("Saikiran", "0001112224").unwrap();
        assert_eq!(contact.name(), "Saikiran");
        assert_eq!(contact.phone(), "0001112224");
    }

    #[test]
    fn test_equality_is_name_and_phone() {
        let a = Contact::new("Sai", "1234567890").unwrap();
        let b = Contact::new("Sai", "1234567890").unwrap();
        let c = Contact::new("Sai", "1234567899").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_short_phone_rejected() {
        let err = Contact::new("Saikiran", "12345").unwrap_err();
        assert_eq!(err.to_string(), "phone: Phone number must be 10 digits");
    }

    #[test]
    fn test_non_digit_phone_rejected() {
        assert!(Contact::new("Saikiran", "00011122ab").is_err());
        assert!(Contact::new("Saikiran", "000111222 ").is_err());
    }

    #[test]
    fn test_empty_fields_report_every_rule() {
        let err = Contact::new("", "").unwrap_err();
        assert_eq!(err.errors().len(), 4);
        assert_eq!(
            err.to_string(),
            "name: Name cannot be empty; \
             name: Name must be between 2 and 100 characters; \
             phone: Phone number cannot be empty; \
             phone: Phone number must be 10 digits"
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Contact::new("   ", "0001112224").unwrap_err();
        assert_eq!(err.to_string(), "name: Name cannot be empty");
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(Contact::new("A", "0001112224").is_err());
        assert!(Contact::new("Al", "0001112224").is_ok());
        assert!(Contact::new("x".repeat(100), "0001112224").is_ok());
        assert!(Contact::new("x".repeat(101), "0001112224").is_err());
    }

    #[test]
    fn test_prefixed_errors_merge() {
        let mut errors = Contact::new("A", "0001112224")
            .unwrap_err()
            .with_prefix("oldContact");
        errors.merge(Contact::new("Ben", "1").unwrap_err().with_prefix("newContact"));
        assert_eq!(
            errors.to_string(),
            "oldContact.name: Name must be between 2 and 100 characters; \
             newContact.phone: Phone number must be 10 digits"
        );
    }
}
