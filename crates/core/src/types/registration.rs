//! Account-registration record and validation.
//!
//! Registration is a purely local affair: a validated record is written to
//! persistent storage so returning visitors are recognized. There is no
//! password and no server-side account behind it.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum length for the registrant's name, after trimming.
pub const MIN_NAME_LENGTH: usize = 3;

/// Errors that can occur when validating a registration form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The name is missing or shorter than [`MIN_NAME_LENGTH`].
    #[error("please enter a valid name (minimum {MIN_NAME_LENGTH} characters)")]
    NameTooShort,
    /// The email is not a Gmail address.
    #[error("please use a Gmail address")]
    NotGmail,
}

/// A Gmail address.
///
/// The storefront only accepts Gmail for order updates, so validation is a
/// literal substring check rather than full RFC parsing.
///
/// ## Examples
///
/// ```
/// use storeclick_core::GmailAddress;
///
/// assert!(GmailAddress::parse("alice@gmail.com").is_ok());
/// assert!(GmailAddress::parse("alice@yahoo.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GmailAddress(String);

impl GmailAddress {
    /// Parse a Gmail address from a string.
    ///
    /// The input is trimmed before checking.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::NotGmail`] if the input does not contain
    /// the literal `@gmail.com`.
    pub fn parse(input: &str) -> Result<Self, RegistrationError> {
        let trimmed = input.trim();
        if trimmed.contains("@gmail.com") {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(RegistrationError::NotGmail)
        }
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated account-registration record.
///
/// This is the second of the two durable entities (alongside the cart) and
/// is persisted under its own storage key as plain JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    /// Registrant's full name.
    pub name: String,
    /// Gmail address for order updates.
    pub email: GmailAddress,
    /// Optional phone number for delivery purposes.
    #[serde(default)]
    pub phone: Option<String>,
    /// When the registration was submitted (serialized as ISO-8601).
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Validate form input and build a registration record.
    ///
    /// `name` and `email` are trimmed; a blank `phone` becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::NameTooShort`] if the trimmed name has
    /// fewer than [`MIN_NAME_LENGTH`] characters, or
    /// [`RegistrationError::NotGmail`] if the email fails the Gmail check.
    /// Nothing is persisted on error.
    pub fn from_form(
        name: &str,
        email: &str,
        phone: &str,
        registered_at: DateTime<Utc>,
    ) -> Result<Self, RegistrationError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LENGTH {
            return Err(RegistrationError::NameTooShort);
        }

        let email = GmailAddress::parse(email)?;

        let phone = phone.trim();
        let phone = if phone.is_empty() {
            None
        } else {
            Some(phone.to_string())
        };

        Ok(Self {
            name: name.to_string(),
            email,
            phone,
            registered_at,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_rejected() {
        let err = Registration::from_form("Al", "al@gmail.com", "", Utc::now()).unwrap_err();
        assert_eq!(err, RegistrationError::NameTooShort);
    }

    #[test]
    fn test_whitespace_padded_short_name_rejected() {
        let err = Registration::from_form("  Al  ", "al@gmail.com", "", Utc::now()).unwrap_err();
        assert_eq!(err, RegistrationError::NameTooShort);
    }

    #[test]
    fn test_non_gmail_rejected() {
        let err =
            Registration::from_form("Alice", "alice@yahoo.com", "", Utc::now()).unwrap_err();
        assert_eq!(err, RegistrationError::NotGmail);
    }

    #[test]
    fn test_valid_registration() {
        let now = Utc::now();
        let reg = Registration::from_form("Alice", "alice@gmail.com", "", now).unwrap();
        assert_eq!(reg.name, "Alice");
        assert_eq!(reg.email.as_str(), "alice@gmail.com");
        assert_eq!(reg.phone, None);
        assert_eq!(reg.registered_at, now);
    }

    #[test]
    fn test_phone_is_optional_but_kept_when_present() {
        let reg = Registration::from_form(
            "Alice",
            "alice@gmail.com",
            "+1 (555) 123-4567",
            Utc::now(),
        )
        .unwrap();
        assert_eq!(reg.phone.as_deref(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn test_registered_at_round_trips_as_iso8601() {
        let reg =
            Registration::from_form("Alice", "alice@gmail.com", "", Utc::now()).unwrap();
        let json = serde_json::to_string(&reg).unwrap();
        assert!(json.contains("registered_at"));

        let restored: Registration = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, reg);
    }
}
