//! Error types for the country-registry crate.
//!
//! This module defines the semantic error enum for dataset loading, registry
//! construction, and lookup argument validation, following the project's
//! error handling conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::validation::CodeKind;

/// Errors that can occur when building or querying a country registry.
///
/// Unknown lookup keys are not errors; lookups report them as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },

    /// The dataset contains no entries.
    #[error("dataset contains no country entries")]
    EmptyDataset,

    /// An entry has an empty name once surrounding whitespace is removed.
    #[error("entry {index} has an empty name")]
    EmptyName {
        /// Position of the entry in the dataset.
        index: usize,
    },

    /// An entry carries none of the three codes.
    #[error("entry {index} ('{name}') has no two-letter, three-letter, or numeric code")]
    MissingCodes {
        /// Position of the entry in the dataset.
        index: usize,
        /// Trimmed entry name.
        name: String,
    },

    /// An alphabetic code has the wrong length or contains non-letters.
    #[error("entry {index} has an invalid {kind}: '{value}'")]
    InvalidCode {
        /// Position of the entry in the dataset.
        index: usize,
        /// Which code failed validation.
        kind: CodeKind,
        /// The rejected code.
        value: String,
    },

    /// A numeric code lies outside 1 to 999.
    #[error("entry {index} has an out-of-range numeric code: {value}")]
    InvalidNumericCode {
        /// Position of the entry in the dataset.
        index: usize,
        /// The rejected code.
        value: u16,
    },

    /// A category mask is empty or sets bits outside the defined categories.
    #[error("invalid category mask: {bits:#b}")]
    InvalidCategoryMask {
        /// Raw bits of the rejected mask.
        bits: u32,
    },

    /// A category name could not be recognised.
    #[error("unknown category '{value}'; expected any, regular, old, or region")]
    UnknownCategory {
        /// The unrecognised name.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = RegistryError::IoError {
            path: Utf8PathBuf::from("/tmp/countries.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset file at '/tmp/countries.json': file not found"
        );
    }

    #[test]
    fn parse_error_formats_correctly() {
        let err = RegistryError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid dataset JSON: unexpected token");
    }

    #[test]
    fn version_error_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported dataset version: expected 1, found 2"
        );
    }

    #[test]
    fn missing_codes_formats_correctly() {
        let err = RegistryError::MissingCodes {
            index: 4,
            name: "Atlantis".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "entry 4 ('Atlantis') has no two-letter, three-letter, or numeric code"
        );
    }

    #[test]
    fn invalid_code_names_the_code_kind() {
        let err = RegistryError::InvalidCode {
            index: 0,
            kind: CodeKind::ThreeLetter,
            value: "D3U".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "entry 0 has an invalid three-letter code: 'D3U'"
        );
    }

    #[test]
    fn invalid_mask_formats_as_binary() {
        let err = RegistryError::InvalidCategoryMask { bits: 8 };
        assert_eq!(err.to_string(), "invalid category mask: 0b1000");
    }

    #[test]
    fn empty_dataset_formats_correctly() {
        assert_eq!(
            RegistryError::EmptyDataset.to_string(),
            "dataset contains no country entries"
        );
    }
}
