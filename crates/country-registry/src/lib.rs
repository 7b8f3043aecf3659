//! ISO 3166-1 country lookup by two-letter, three-letter, or numeric code.
//!
//! The crate holds a fixed table of countries, withdrawn (historical) codes,
//! and UN M49 statistical regions, indexed three ways. Lookups are
//! case-insensitive, treat anything that parses as an integer as a numeric
//! code, and filter results by category.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A process-wide registry built lazily from the built-in table
//! - Explicit registries built from custom rows or a JSON dataset
//! - Category filtering with [`CategoryMask`]
//! - First-write-wins handling of overloaded codes, reported through
//!   [`CountryRegistry::collisions`] and `tracing` warnings
//!
//! # Example
//!
//! ```
//! use country_registry::{Category, CategoryMask, country_name, find};
//!
//! let germany = find("DE", CategoryMask::ANY)
//!     .expect("valid mask")
//!     .expect("Germany is present");
//! assert_eq!(germany.numeric_code(), Some(276));
//! assert_eq!(germany.category(), Category::Regular);
//!
//! // Africa is a region, so a regular-only lookup skips it.
//! assert_eq!(country_name(2, CategoryMask::REGULAR), Ok(None));
//! assert_eq!(country_name(2, CategoryMask::REGION), Ok(Some("Africa")));
//! ```

use std::sync::OnceLock;

mod category;
mod country;
mod data;
mod error;
mod key;
pub mod lookup_cli;
mod registry;
mod validation;

pub use category::{Category, CategoryMask};
pub use country::{Country, CountryEntry};
pub use data::BUILTIN_COUNTRIES;
pub use error::RegistryError;
pub use key::LookupKey;
pub use registry::{CodeCollision, CountryRegistry};
pub use validation::{
    CodeKind, NUMERIC_CODE_MAX, NUMERIC_CODE_MIN, is_valid_numeric_code,
    is_valid_three_letter_code, is_valid_two_letter_code,
};

static SHARED_REGISTRY: OnceLock<CountryRegistry> = OnceLock::new();

/// Returns the process-wide registry built from the built-in table.
///
/// The registry is built on first use and lives for the rest of the process.
#[must_use]
pub fn registry() -> &'static CountryRegistry {
    SHARED_REGISTRY.get_or_init(CountryRegistry::builtin)
}

/// Looks up `key` in the process-wide registry.
///
/// See [`CountryRegistry::find`].
///
/// # Errors
///
/// Returns [`RegistryError::InvalidCategoryMask`] for an invalid mask.
pub fn find<'k, K>(key: K, mask: CategoryMask) -> Result<Option<&'static Country>, RegistryError>
where
    K: Into<LookupKey<'k>>,
{
    registry().find(key, mask)
}

/// Looks up the name for `key` in the process-wide registry.
///
/// See [`CountryRegistry::country_name`].
///
/// # Errors
///
/// Returns [`RegistryError::InvalidCategoryMask`] for an invalid mask.
pub fn country_name<'k, K>(key: K, mask: CategoryMask) -> Result<Option<&'static str>, RegistryError>
where
    K: Into<LookupKey<'k>>,
{
    registry().country_name(key, mask)
}
