//! Victorian postcode value type.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Victorian postcodes: four ASCII digits starting with `3`.
///
/// `[0-9]` rather than `\d` because the regex crate's `\d` matches any
/// Unicode decimal digit.
pub static VIC_POSTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3[0-9]{3}$").unwrap());

/// Errors produced when parsing a [`Postcode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostcodeError {
    #[error("Postcode must be four digits starting with 3, got {0:?}")]
    Invalid(String),
}

/// Returns `true` iff `input` is exactly four digits and begins with `3`.
///
/// No trimming or other normalization is applied.
pub fn is_valid(input: &str) -> bool {
    VIC_POSTCODE_REGEX.is_match(input)
}

/// A validated Victorian postcode.
///
/// The only way to obtain one is through [`Postcode::parse`], so holding a
/// `Postcode` means the value already passed [`is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Parses and validates a postcode.
    ///
    /// # Errors
    ///
    /// Returns [`PostcodeError::Invalid`] if `input` does not match `3NNN`.
    pub fn parse(input: &str) -> Result<Self, PostcodeError> {
        if is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(PostcodeError::Invalid(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Postcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
