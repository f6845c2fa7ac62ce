//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The accepted phone format: exactly ten decimal digits and nothing else.
pub const PHONE_PATTERN: &str = r"^\d{10}$";

// Unicode mode is off so `\d` means `[0-9]` only.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(PHONE_PATTERN)
        .unicode(false)
        .build()
        .expect("Failed to compile phone regex")
});

/// A validated phone number.
///
/// A `Phone` always holds exactly ten ASCII digits. The check runs once, in
/// [`Phone::new`]; there is no way to change the value afterwards, so editing
/// a number means building a new `Phone`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` does not match
    /// [`PHONE_PATTERN`].
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Whether `phone` would be accepted by [`Phone::new`].
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.value(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("123-456-7890").is_err());
        assert!(Phone::new("(123)4567890").is_err());
        assert!(Phone::new("+123456789").is_err());
        assert!(Phone::new(" 1234567890").is_err());
        assert!(Phone::new("1234567890\n").is_err());
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode `Nd` but not ASCII.
        assert!(Phone::new("٠١٢٣٤٥٦٧٨٩").is_err());
        // Fullwidth digits.
        assert!(Phone::new("０１２３４５６７８９").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = Phone::new("555-1234").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("555-1234".to_string()));
        assert_eq!(err.to_string(), "Invalid phone number: 555-1234");
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("5555555555").unwrap();
        assert_eq!(format!("{}", phone), "5555555555");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("5555555555").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5555555555\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"555-555-5555\"");
        assert!(result.is_err());
    }
}
