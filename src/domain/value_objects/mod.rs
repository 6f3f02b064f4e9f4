//! Self-validating wrappers around primitive strings
//!
//! Construction is always explicit (`Email::parse`, `"...".parse::<Email>()`);
//! there is no implicit conversion from a raw string.

pub mod company_identity;
pub mod email;

pub use company_identity::CompanyIdentity;
pub use email::Email;

use std::hash::{Hash, Hasher};

/// Uppercase one char, or keep it when its uppercase form expands into
/// several chars (`ß` stays `ß`).
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Char-by-char case fold. Two strings compare equal ignoring case exactly
/// when their folds are equal; storage keys its unique indexes on it.
pub fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Case-insensitive ordinal comparison.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Hash consistent with [`eq_ignore_case`].
fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for c in value.chars().map(fold_char) {
        c.hash(state);
    }
    state.write_u8(0xff);
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
