use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::errors::UserError;

const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    #[default]
    Customer,
    Manager,
    Admin,
}

/// A syntactically valid, lowercased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let raw = raw.trim();
        let valid = EMAIL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(raw));
        if !valid {
            return Err(UserError::InvalidEmail);
        }

        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A plaintext password that passed the strength policy. Only ever handed to
/// the password hasher; never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn new(raw: impl Into<String>) -> Result<Self, UserError> {
        let raw = raw.into();
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort);
        }
        if !raw.chars().any(char::is_uppercase) {
            return Err(UserError::PasswordMissingUppercase);
        }
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(UserError::PasswordMissingDigit);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}

/// Trims a display name and checks it against the naming rules.
pub fn normalize_name(raw: &str) -> Result<String, UserError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(UserError::NameEmpty);
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(UserError::NameContainsDigits);
    }
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(UserError::NameLength);
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_lowercase_email() {
        let email = Email::parse("Ada.Lovelace@Example.COM").unwrap();

        assert_eq!(email.as_str(), "ada.lovelace@example.com");
    }

    #[test]
    fn should_reject_email_without_domain() {
        assert!(matches!(
            Email::parse("ada@").unwrap_err(),
            UserError::InvalidEmail
        ));
        assert!(matches!(
            Email::parse("ada.example.com").unwrap_err(),
            UserError::InvalidEmail
        ));
    }

    #[test]
    fn should_accept_strong_password() {
        assert!(PlainPassword::new("Passw0rd").is_ok());
    }

    #[test]
    fn should_reject_short_password() {
        assert!(matches!(
            PlainPassword::new("short").unwrap_err(),
            UserError::PasswordTooShort
        ));
    }

    #[test]
    fn should_reject_password_without_uppercase() {
        assert!(matches!(
            PlainPassword::new("passw0rd").unwrap_err(),
            UserError::PasswordMissingUppercase
        ));
    }

    #[test]
    fn should_reject_password_without_digit() {
        assert!(matches!(
            PlainPassword::new("Password").unwrap_err(),
            UserError::PasswordMissingDigit
        ));
    }

    #[test]
    fn should_hide_password_in_debug_output() {
        let password = PlainPassword::new("Passw0rd").unwrap();

        assert!(!format!("{:?}", password).contains("Passw0rd"));
    }

    #[test]
    fn should_trim_name() {
        assert_eq!(normalize_name("  Ada Lovelace ").unwrap(), "Ada Lovelace");
    }

    #[test]
    fn should_reject_single_letter_name() {
        assert!(matches!(
            normalize_name("A").unwrap_err(),
            UserError::NameLength
        ));
    }

    #[test]
    fn should_parse_and_display_roles() {
        assert_eq!("manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::default(), UserRole::Customer);
        assert!("root".parse::<UserRole>().is_err());
    }

    proptest! {
        #[test]
        fn names_with_digits_are_always_rejected(prefix in "[a-zA-Z ]{0,10}", digit in 0u8..10, suffix in "[a-zA-Z ]{0,10}") {
            let name = format!("{prefix}{digit}{suffix}");
            prop_assert!(normalize_name(&name).is_err());
        }

        #[test]
        fn passwords_shorter_than_eight_chars_are_rejected(raw in "[A-Z0-9a-z]{0,7}") {
            prop_assert!(matches!(PlainPassword::new(raw), Err(UserError::PasswordTooShort)));
        }

        #[test]
        fn emails_are_stored_lowercase(local in "[a-zA-Z0-9]{1,12}", domain in "[a-zA-Z]{1,12}", tld in "[a-zA-Z]{2,4}") {
            let email = Email::parse(&format!("{local}@{domain}.{tld}")).unwrap();
            prop_assert_eq!(email.as_str(), email.as_str().to_lowercase());
        }
    }
}
