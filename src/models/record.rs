//! Record model: one contact name and its phone numbers.

use crate::domain::{Field, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep their insertion order and
/// may contain duplicates; every lookup by value matches the first entry in
/// that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in their current order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// On a validation failure the record is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<&mut Self> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(self)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns the removed phone, or `None` when nothing matched. A missing
    /// phone is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> Option<Phone> {
        let index = self.position(phone)?;
        let removed = self.phones.remove(index);
        tracing::debug!(name = %self.name, phone = %removed, "Phone removed");
        Some(removed)
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`, keeping
    /// its position.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old_phone` is not in the record.
    /// - `BookError::InvalidFormat` if `new_phone` fails validation.
    ///
    /// Either way the phone list is unchanged.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self
            .position(old_phone)
            .ok_or_else(|| BookError::PhoneNotFound(old_phone.to_string()))?;
        let replacement = Phone::new(new_phone)?;

        tracing::debug!(
            name = %self.name,
            old = %old_phone,
            new = %replacement,
            "Phone edited"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// The first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
