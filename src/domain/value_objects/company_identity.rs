//! Company registration identifier value object

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{eq_ignore_case, fold_case, hash_ignore_case, is_blank};
use crate::shared::errors::InvalidArgument;

/// Minimum length, counted in characters.
pub const MIN_LENGTH: usize = 14;

/// A company identifier of at least [`MIN_LENGTH`] characters.
///
/// Neither charset nor checksum is validated.
#[derive(Debug, Clone)]
pub struct CompanyIdentity(String);

impl CompanyIdentity {
    pub fn parse(identifier: impl Into<String>) -> Result<Self, InvalidArgument> {
        let identifier = identifier.into();
        if is_blank(&identifier) {
            return Err(InvalidArgument::new(
                "identifier",
                "Invalid company identifier.",
            ));
        }
        if identifier.chars().count() < MIN_LENGTH {
            return Err(InvalidArgument::new(
                "identifier",
                format!("Company identifier must be at least {MIN_LENGTH} characters long."),
            ));
        }
        Ok(Self(identifier))
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

impl FromStr for CompanyIdentity {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for CompanyIdentity {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.0, &other.0)
    }
}

impl Eq for CompanyIdentity {}

impl Hash for CompanyIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.0, state);
    }
}

impl AsRef<str> for CompanyIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CompanyIdentity> for String {
    fn from(identity: CompanyIdentity) -> Self {
        identity.0
    }
}

impl Serialize for CompanyIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
