//! Email address value object

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{eq_ignore_case, fold_case, hash_ignore_case, is_blank};
use crate::shared::errors::InvalidArgument;

const INVALID_EMAIL: &str = "Invalid email address.";

/// An email address that is non-blank and contains `@`.
///
/// No further structure is checked. Equality and hashing ignore case; the
/// original spelling is kept and rendered back unchanged.
#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    pub fn parse(address: impl Into<String>) -> Result<Self, InvalidArgument> {
        let address = address.into();
        if is_blank(&address) || !address.contains('@') {
            return Err(InvalidArgument::new("address", INVALID_EMAIL));
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-folded form; equal for exactly the values that compare equal.
    pub fn key(&self) -> String {
        fold_case(&self.0)
    }
}

impl FromStr for Email {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.0, &other.0)
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.0, state);
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl Serialize for Email {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(email: &Email) -> u64 {
        let mut hasher = DefaultHasher::new();
        email.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn valid_address_is_accepted() {
        let email = Email::parse("test@example.com").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn blank_addresses_are_rejected() {
        for raw in ["", " ", "   ", "\t\n"] {
            let err = Email::parse(raw).unwrap_err();
            assert_eq!(err.param, "address");
            assert!(err.reason.contains("Invalid email address"));
        }
    }

    #[test]
    fn address_without_at_is_rejected() {
        for raw in ["testexample.com", "not-an-email", "a.b.c"] {
            let err = Email::parse(raw).unwrap_err();
            assert_eq!(err.param, "address");
        }
    }

    #[test]
    fn no_structural_checks_beyond_at() {
        assert!(Email::parse("@").is_ok());
        assert!(Email::parse("user@").is_ok());
        assert!(Email::parse(" padded@example.com ").is_ok());
    }

    #[test]
    fn renders_original_string() {
        let raw = "Mixed.Case@Example.com";
        let email: Email = raw.parse().unwrap();
        assert_eq!(email.to_string(), raw);
        assert_eq!(String::from(email), raw);
    }

    #[test]
    fn equality_ignores_case() {
        let a = Email::parse("test@example.com").unwrap();
        let b = Email::parse("TEST@EXAMPLE.COM").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_addresses_are_not_equal() {
        let a = Email::parse("test@example.com").unwrap();
        let b = Email::parse("other@example.com").unwrap();
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn case_folding_is_per_character() {
        let a = Email::parse("straße@x.de").unwrap();
        let b = Email::parse("STRASSE@x.de").unwrap();
        assert_ne!(a, b);
        assert_ne!(a.key(), b.key());

        let c = Email::parse("STRAßE@X.DE").unwrap();
        assert_eq!(a, c);
        assert_eq!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn non_ascii_case_variants_are_equal() {
        let a = Email::parse("änn@x.io").unwrap();
        let b = Email::parse("ÄNN@x.io").unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.key(), "ÄNN@X.IO");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn hash_set_deduplicates_case_variants() {
        let set: HashSet<Email> = ["ann@example.com", "ANN@example.com", "Ann@Example.Com"]
            .into_iter()
            .map(|s| Email::parse(s).unwrap())
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_as_plain_string() {
        let email = Email::parse("ann@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"ann@example.com\"");
    }
}
