//! The `Field` contract and the `Name` value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named value held by a record.
///
/// Every field renders as text through `Display`; `value` exposes the same
/// text without formatting machinery.
pub trait Field: fmt::Display {
    /// The raw string value of the field.
    fn value(&self) -> &str;
}

/// A contact's name.
///
/// Names carry no validation rule and are stored verbatim, including
/// surrounding whitespace and the empty string.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::new("John");
/// assert_eq!(name.value(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
