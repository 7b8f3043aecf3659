//! The country registry: an ordered record list plus three code indexes.
//!
//! A registry is built once from an ordered dataset and is read-only
//! afterwards. Each code index maps a lowercased code (or a numeric code) to
//! the position of the first record that carried it; later records with the
//! same code stay in the record list but are unreachable through that code.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::category::{Category, CategoryMask};
use crate::country::{Country, CountryEntry};
use crate::data::BUILTIN_COUNTRIES;
use crate::error::RegistryError;
use crate::key::{LookupKey, ResolvedKey};
use crate::validation::{CodeKind, validate_entry};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

/// A code that was claimed by an earlier record during the build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeCollision {
    /// Which index the collision happened in.
    pub kind: CodeKind,
    /// The normalised key, lowercase for alphabetic codes.
    pub key: String,
    /// Position of the record that keeps the key.
    pub kept: usize,
    /// Position of the record that lost it.
    pub dropped: usize,
}

/// An immutable, indexed set of country records.
///
/// Build one with [`CountryRegistry::builtin`], [`CountryRegistry::from_entries`],
/// [`CountryRegistry::from_json`], or [`CountryRegistry::from_file`], then
/// share it by reference. Lookups never mutate the registry.
///
/// # Example
///
/// ```
/// use country_registry::{CategoryMask, CountryRegistry};
///
/// let registry = CountryRegistry::builtin();
/// let germany = registry
///     .find("de", CategoryMask::ANY)
///     .expect("valid mask")
///     .expect("Germany is present");
///
/// assert_eq!(germany.name(), "Germany");
/// assert_eq!(germany.three_letter(), Some("DEU"));
/// assert_eq!(registry.find(276, CategoryMask::ANY), Ok(Some(germany)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    by_two_letter: HashMap<String, usize>,
    by_three_letter: HashMap<String, usize>,
    by_numeric: HashMap<u16, usize>,
    collisions: Vec<CodeCollision>,
}

impl CountryRegistry {
    /// Builds a registry from the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut builder = Builder::with_capacity(BUILTIN_COUNTRIES.len(), CollisionLevel::Debug);
        for entry in BUILTIN_COUNTRIES {
            builder.push(entry);
        }
        builder.finish()
    }

    /// Builds a registry from dataset rows, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The dataset is empty
    /// - A name is blank
    /// - An entry has no code at all
    /// - A code is malformed or a numeric code is outside 1 to 999
    ///
    /// Duplicate codes are not errors; see [`CountryRegistry::collisions`].
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CountryEntry<'a>>,
    {
        let rows = entries.into_iter();
        let mut builder = Builder::with_capacity(rows.size_hint().0, CollisionLevel::Warn);
        for (index, entry) in rows.enumerate() {
            validate_entry(index, &entry)?;
            builder.push(&entry);
        }
        if builder.countries.is_empty() {
            return Err(RegistryError::EmptyDataset);
        }
        Ok(builder.finish())
    }

    /// Parses a dataset from a JSON string and builds a registry from it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the JSON is malformed, the version is
    /// unsupported, or any row fails the checks of
    /// [`CountryRegistry::from_entries`].
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
            message: e.to_string(),
        })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::from_entries(raw.countries.iter().map(RawCountry::as_entry))
    }

    /// Loads a dataset JSON file from a capability-scoped directory.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, RegistryError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| RegistryError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Finds the record for `key` if its category is part of `mask`.
    ///
    /// Integer keys and text that parses as an integer are looked up by
    /// numeric code. Other text is compared case-insensitively against
    /// two-letter codes when it is two characters long, and against
    /// three-letter codes otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidCategoryMask`] if `mask` is empty or
    /// carries undefined bits. Unknown keys yield `Ok(None)`.
    pub fn find<'k, K>(&self, key: K, mask: CategoryMask) -> Result<Option<&Country>, RegistryError>
    where
        K: Into<LookupKey<'k>>,
    {
        let filter = mask.validate()?;
        let position = match key.into().resolve() {
            ResolvedKey::Numeric(value) => u16::try_from(value)
                .ok()
                .and_then(|code| self.by_numeric.get(&code)),
            ResolvedKey::TwoLetter(code) => self.by_two_letter.get(&code),
            ResolvedKey::ThreeLetter(code) => self.by_three_letter.get(&code),
        };

        Ok(position
            .and_then(|&index| self.countries.get(index))
            .filter(|country| filter.matches(country.category())))
    }

    /// Finds a record of any category.
    ///
    /// Equivalent to [`CountryRegistry::find`] with [`CategoryMask::ANY`],
    /// which cannot fail.
    #[must_use]
    pub fn find_any<'k, K>(&self, key: K) -> Option<&Country>
    where
        K: Into<LookupKey<'k>>,
    {
        self.find(key, CategoryMask::ANY).ok().flatten()
    }

    /// Returns only the name of the record [`CountryRegistry::find`] would
    /// return.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidCategoryMask`] for an invalid mask.
    pub fn country_name<'k, K>(
        &self,
        key: K,
        mask: CategoryMask,
    ) -> Result<Option<&str>, RegistryError>
    where
        K: Into<LookupKey<'k>>,
    {
        Ok(self.find(key, mask)?.map(Country::name))
    }

    /// Returns every record in build order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Returns the record at `position` in build order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Country> {
        self.countries.get(position)
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns `true` if the registry holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Returns the codes that were dropped from an index during the build.
    #[must_use]
    pub fn collisions(&self) -> &[CodeCollision] {
        &self.collisions
    }

    /// Counts records per category.
    #[must_use]
    pub fn count_by_category(&self, category: Category) -> usize {
        self.countries
            .iter()
            .filter(|country| country.category() == category)
            .count()
    }
}

/// Severity used when a build reports a duplicate code.
///
/// The built-in table overloads a known set of codes, so its collisions are
/// logged at debug. Caller-supplied datasets warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollisionLevel {
    Debug,
    Warn,
}

/// Accumulates records and indexes; the registry is the frozen result.
struct Builder {
    level: CollisionLevel,
    countries: Vec<Country>,
    by_two_letter: HashMap<String, usize>,
    by_three_letter: HashMap<String, usize>,
    by_numeric: HashMap<u16, usize>,
    collisions: Vec<CodeCollision>,
}

impl Builder {
    fn with_capacity(capacity: usize, level: CollisionLevel) -> Self {
        Self {
            level,
            countries: Vec::with_capacity(capacity),
            by_two_letter: HashMap::with_capacity(capacity),
            by_three_letter: HashMap::with_capacity(capacity),
            by_numeric: HashMap::with_capacity(capacity),
            collisions: Vec::new(),
        }
    }

    fn push(&mut self, entry: &CountryEntry<'_>) {
        let position = self.countries.len();
        let country = Country::from_entry(entry);

        if let Some(code) = country.two_letter() {
            let key = code.to_lowercase();
            if let Some(collision) = claim(&mut self.by_two_letter, key, position, CodeKind::TwoLetter) {
                self.record(collision, &country);
            }
        }
        if let Some(code) = country.three_letter() {
            let key = code.to_lowercase();
            if let Some(collision) =
                claim(&mut self.by_three_letter, key, position, CodeKind::ThreeLetter)
            {
                self.record(collision, &country);
            }
        }
        if let Some(code) = country.numeric_code()
            && let Some(collision) = claim(&mut self.by_numeric, code, position, CodeKind::Numeric)
        {
            self.record(collision, &country);
        }

        self.countries.push(country);
    }

    fn record(&mut self, collision: CodeCollision, dropped: &Country) {
        let kept = self
            .countries
            .get(collision.kept)
            .map_or("<unknown>", Country::name);
        match self.level {
            CollisionLevel::Debug => debug!(
                kind = %collision.kind,
                key = %collision.key,
                kept,
                dropped = dropped.name(),
                "overloaded built-in country code; keeping the first record"
            ),
            CollisionLevel::Warn => warn!(
                kind = %collision.kind,
                key = %collision.key,
                kept,
                dropped = dropped.name(),
                "duplicate country code; keeping the first record"
            ),
        }
        self.collisions.push(collision);
    }

    fn finish(self) -> CountryRegistry {
        debug!(
            countries = self.countries.len(),
            collisions = self.collisions.len(),
            "country registry built"
        );
        CountryRegistry {
            countries: self.countries,
            by_two_letter: self.by_two_letter,
            by_three_letter: self.by_three_letter,
            by_numeric: self.by_numeric,
            collisions: self.collisions,
        }
    }
}

/// Inserts `key → position` unless the key is taken.
///
/// Returns the collision when an earlier record already owns the key.
fn claim<K>(
    index: &mut HashMap<K, usize>,
    key: K,
    position: usize,
    kind: CodeKind,
) -> Option<CodeCollision>
where
    K: Eq + Hash + fmt::Display,
{
    match index.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(position);
            None
        }
        Entry::Occupied(slot) => Some(CodeCollision {
            kind,
            key: slot.key().to_string(),
            kept: *slot.get(),
            dropped: position,
        }),
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    version: u32,
    countries: Vec<RawCountry>,
}

/// Raw JSON representation of a dataset row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCountry {
    name: String,
    #[serde(default)]
    two_letter: Option<String>,
    #[serde(default)]
    three_letter: Option<String>,
    #[serde(default)]
    numeric: Option<u16>,
    #[serde(default)]
    category: Option<Category>,
}

impl RawCountry {
    fn as_entry(&self) -> CountryEntry<'_> {
        CountryEntry {
            two_letter: self.two_letter.as_deref(),
            three_letter: self.three_letter.as_deref(),
            numeric: self.numeric,
            name: &self.name,
            category: self.category,
        }
    }
}
