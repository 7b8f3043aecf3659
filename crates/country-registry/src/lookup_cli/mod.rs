//! CLI support for resolving country codes.
//!
//! This module provides parsing and lookup helpers for the `country-lookup`
//! binary. The binary delegates to these functions so they can be exercised
//! in tests without spawning a subprocess.

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;

use crate::category::CategoryMask;
use crate::country::Country;
use crate::error::RegistryError;
use crate::registry::CountryRegistry;

mod error;

pub use error::CliError;

/// Parsed options for the lookup CLI.
#[derive(Debug, Clone)]
pub struct Options {
    keys: Vec<String>,
    mask: CategoryMask,
    data_path: Option<Utf8PathBuf>,
    json: bool,
}

impl Options {
    /// Returns the keys to resolve, in command-line order.
    ///
    /// # Example
    ///
    /// ```
    /// use country_registry::lookup_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["de".to_string(), "840".to_string()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.keys(), ["de", "840"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the category mask applied to every key.
    #[must_use]
    pub const fn mask(&self) -> CategoryMask {
        self.mask
    }

    /// Returns the dataset path, if one replaces the built-in table.
    #[must_use]
    pub fn data_path(&self) -> Option<&Utf8Path> {
        self.data_path.as_deref()
    }

    /// Returns `true` when results should be printed as JSON lines.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of resolving one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutcome {
    /// Key as supplied on the command line.
    pub key: String,
    /// Matching record, if any.
    pub country: Option<Country>,
}

impl LookupOutcome {
    /// Returns `true` if the key matched a record.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.country.is_some()
    }
}

/// Parses CLI arguments into lookup options.
///
/// Arguments that are not flags are lookup keys. `--` ends flag parsing so
/// that keys such as `-1` can be passed through.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown or missing its value, the mask
/// cannot be parsed, or no key is supplied.
///
/// # Example
///
/// ```
/// use country_registry::CategoryMask;
/// use country_registry::lookup_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--mask".to_string(), "region".to_string(), "150".to_string()];
///
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// assert_eq!(options.mask(), CategoryMask::REGION);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut keys: Vec<String> = Vec::new();
    let mut mask = CategoryMask::ANY;
    let mut data_path: Option<Utf8PathBuf> = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--mask" => {
                let value = next_value(&mut args, "--mask")?;
                mask = parse_mask(value)?;
            }
            "--data" => {
                let value = next_value(&mut args, "--data")?;
                data_path = Some(Utf8PathBuf::from(value));
            }
            "--json" => json = true,
            "--" => keys.extend(args.by_ref()),
            _ if arg.starts_with("--") => return Err(CliError::UnknownArgument { value: arg }),
            _ => keys.push(arg),
        }
    }

    if keys.is_empty() {
        return Err(CliError::MissingKeys);
    }

    Ok(ParseOutcome::Options(Options {
        keys,
        mask,
        data_path,
        json,
    }))
}

/// Returns the registry the options ask for.
///
/// Without `--data` this borrows the process-wide built-in registry.
///
/// # Errors
///
/// Returns [`CliError`] when the dataset directory cannot be opened or the
/// file cannot be read or parsed.
pub fn load_registry(options: &Options) -> Result<Cow<'static, CountryRegistry>, CliError> {
    let Some(path) = options.data_path() else {
        return Ok(Cow::Borrowed(crate::registry()));
    };

    let file_name = path.file_name().ok_or_else(|| CliError::InvalidDataPath {
        path: path.to_path_buf(),
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let registry =
        CountryRegistry::from_file(&dir, Utf8Path::new(file_name)).map_err(|err| match err {
            RegistryError::IoError { message, .. } => RegistryError::IoError {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
    Ok(Cow::Owned(registry))
}

/// Resolves every key in `options` against `registry`.
///
/// Unknown keys produce an outcome without a record; they are not errors.
///
/// # Errors
///
/// Returns [`CliError`] if the mask is rejected by the registry.
///
/// # Example
///
/// ```
/// use country_registry::CountryRegistry;
/// use country_registry::lookup_cli::{ParseOutcome, parse_args, resolve_keys};
///
/// let args = vec!["us".to_string(), "xx".to_string()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let outcomes = resolve_keys(&CountryRegistry::builtin(), &options).expect("resolve");
/// assert!(outcomes[0].is_found());
/// assert!(!outcomes[1].is_found());
/// ```
pub fn resolve_keys(
    registry: &CountryRegistry,
    options: &Options,
) -> Result<Vec<LookupOutcome>, CliError> {
    options
        .keys
        .iter()
        .map(|key| {
            let country = registry.find(key, options.mask)?.cloned();
            Ok(LookupOutcome {
                key: key.clone(),
                country,
            })
        })
        .collect()
}

/// Formats one outcome as a line of CLI output.
///
/// # Errors
///
/// Returns [`CliError::SerializeError`] if JSON rendering fails.
///
/// # Example
///
/// ```
/// use country_registry::lookup_cli::{LookupOutcome, format_outcome};
///
/// let outcome = LookupOutcome {
///     key: "xx".to_string(),
///     country: None,
/// };
///
/// assert_eq!(format_outcome(&outcome, false).expect("format"), "xx: not found");
/// ```
pub fn format_outcome(outcome: &LookupOutcome, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string(outcome).map_err(|e| CliError::SerializeError {
            message: e.to_string(),
        });
    }

    let Some(country) = &outcome.country else {
        return Ok(format!("{}: not found", outcome.key));
    };
    let numeric = country
        .numeric_code()
        .map_or_else(|| "-".to_owned(), |code| format!("{code:03}"));
    Ok(format!(
        "{}: {} ({}/{}/{}, {})",
        outcome.key,
        country.name(),
        country.two_letter().unwrap_or("-"),
        country.three_letter().unwrap_or("-"),
        numeric,
        country.category()
    ))
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_mask(value: String) -> Result<CategoryMask, CliError> {
    value
        .parse::<CategoryMask>()
        .map_err(|err| CliError::InvalidMask {
            message: err.to_string(),
            value,
        })
}

#[cfg(test)]
#[path = "../../tests/test_support.rs"]
mod test_support;

#[cfg(test)]
mod tests;
