//! Error types for the country lookup CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::RegistryError;

/// Errors surfaced by the CLI parsing and lookup flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No lookup keys were supplied.
    #[error("missing lookup key; pass at least one code")]
    MissingKeys,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// The `--mask` value could not be parsed.
    #[error("invalid value for --mask: '{value}' ({message})")]
    InvalidMask {
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The `--data` path does not name a file.
    #[error("dataset path '{path}' does not name a file")]
    InvalidDataPath {
        /// Path supplied for the flag.
        path: Utf8PathBuf,
    },
    /// A lookup result could not be rendered as JSON.
    #[error("failed to serialise lookup result: {message}")]
    SerializeError {
        /// Serializer error message.
        message: String,
    },
    /// An error occurred while loading or querying the registry.
    #[error("registry error: {source}")]
    RegistryError {
        /// Underlying registry error.
        #[from]
        #[source]
        source: RegistryError,
    },
}
