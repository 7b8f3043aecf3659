//! Code validation for dataset entries.
//!
//! # Validation Rules
//!
//! - Two-letter codes: exactly 2 ASCII letters
//! - Three-letter codes: exactly 3 ASCII letters
//! - Numeric codes: 1 to 999 inclusive
//! - Names: non-empty once surrounding whitespace is removed
//! - Every entry carries at least one code

use std::fmt;

use crate::country::CountryEntry;
use crate::error::RegistryError;

/// Smallest numeric code accepted in a dataset.
pub const NUMERIC_CODE_MIN: u16 = 1;

/// Largest numeric code accepted in a dataset.
pub const NUMERIC_CODE_MAX: u16 = 999;

/// Identifies one of the three code columns of a country entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// ISO 3166-1 alpha-2.
    TwoLetter,
    /// ISO 3166-1 alpha-3.
    ThreeLetter,
    /// ISO 3166-1 numeric.
    Numeric,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TwoLetter => "two-letter code",
            Self::ThreeLetter => "three-letter code",
            Self::Numeric => "numeric code",
        };
        f.write_str(label)
    }
}

/// Returns `true` if `code` is a well-formed two-letter code.
///
/// Case is not significant.
///
/// # Examples
///
/// ```
/// use country_registry::is_valid_two_letter_code;
///
/// assert!(is_valid_two_letter_code("DE"));
/// assert!(is_valid_two_letter_code("de"));
/// assert!(!is_valid_two_letter_code("DEU"));
/// assert!(!is_valid_two_letter_code("D1"));
/// ```
#[must_use]
pub fn is_valid_two_letter_code(code: &str) -> bool {
    is_alpha_code(code, 2)
}

/// Returns `true` if `code` is a well-formed three-letter code.
///
/// # Examples
///
/// ```
/// use country_registry::is_valid_three_letter_code;
///
/// assert!(is_valid_three_letter_code("DEU"));
/// assert!(!is_valid_three_letter_code("DE"));
/// ```
#[must_use]
pub fn is_valid_three_letter_code(code: &str) -> bool {
    is_alpha_code(code, 3)
}

/// Returns `true` if `code` lies within [`NUMERIC_CODE_MIN`] and
/// [`NUMERIC_CODE_MAX`].
#[must_use]
pub const fn is_valid_numeric_code(code: u16) -> bool {
    code >= NUMERIC_CODE_MIN && code <= NUMERIC_CODE_MAX
}

fn is_alpha_code(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Checks a dataset entry before it is added to a registry.
///
/// `index` is the entry's position in the dataset and is carried into the
/// returned error.
pub(crate) fn validate_entry(index: usize, entry: &CountryEntry<'_>) -> Result<(), RegistryError> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(RegistryError::EmptyName { index });
    }

    if entry.two_letter.is_none() && entry.three_letter.is_none() && entry.numeric.is_none() {
        return Err(RegistryError::MissingCodes {
            index,
            name: name.to_owned(),
        });
    }

    if let Some(code) = entry.two_letter
        && !is_valid_two_letter_code(code)
    {
        return Err(RegistryError::InvalidCode {
            index,
            kind: CodeKind::TwoLetter,
            value: code.to_owned(),
        });
    }

    if let Some(code) = entry.three_letter
        && !is_valid_three_letter_code(code)
    {
        return Err(RegistryError::InvalidCode {
            index,
            kind: CodeKind::ThreeLetter,
            value: code.to_owned(),
        });
    }

    match entry.numeric {
        Some(value) if !is_valid_numeric_code(value) => {
            Err(RegistryError::InvalidNumericCode { index, value })
        }
        _ => Ok(()),
    }
}
