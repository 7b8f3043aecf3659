//! Country records and the dataset rows they are built from.

use serde::Serialize;

use crate::category::Category;

/// One row of a country dataset.
///
/// Rows have a fixed shape: every code is optional and the category defaults
/// to [`Category::Regular`] when absent. The built-in table is a slice of
/// `CountryEntry<'static>`; JSON datasets borrow from their parsed rows.
///
/// # Example
///
/// ```
/// use country_registry::{Category, CountryEntry};
///
/// let entry = CountryEntry::new(Some("DE"), Some("DEU"), Some(276), "Germany");
/// assert_eq!(entry.category(), Category::Regular);
///
/// let burma = CountryEntry::new(Some("BU"), Some("BUR"), Some(104), "Burma")
///     .with_category(Category::Old);
/// assert_eq!(burma.category(), Category::Old);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry<'a> {
    /// Two-letter code, in display case.
    pub two_letter: Option<&'a str>,
    /// Three-letter code, in display case.
    pub three_letter: Option<&'a str>,
    /// Numeric code.
    pub numeric: Option<u16>,
    /// Display name; surrounding whitespace is trimmed on build.
    pub name: &'a str,
    /// Category, or `None` for [`Category::Regular`].
    pub category: Option<Category>,
}

impl<'a> CountryEntry<'a> {
    /// Creates a regular entry.
    #[must_use]
    pub const fn new(
        two_letter: Option<&'a str>,
        three_letter: Option<&'a str>,
        numeric: Option<u16>,
        name: &'a str,
    ) -> Self {
        Self {
            two_letter,
            three_letter,
            numeric,
            name,
            category: None,
        }
    }

    /// Returns the entry with an explicit category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns the effective category.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self.category {
            Some(category) => category,
            None => Category::Regular,
        }
    }
}

/// An immutable country, historical entity, or region record.
///
/// Codes keep the case they were supplied in; lookups compare them
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    two_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    three_letter: Option<String>,
    #[serde(rename = "numeric", skip_serializing_if = "Option::is_none")]
    numeric_code: Option<u16>,
    category: Category,
}

impl Country {
    pub(crate) fn from_entry(entry: &CountryEntry<'_>) -> Self {
        Self {
            name: entry.name.trim().to_owned(),
            two_letter: entry.two_letter.map(str::to_owned),
            three_letter: entry.three_letter.map(str::to_owned),
            numeric_code: entry.numeric,
            category: entry.category(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the two-letter code, if any.
    #[must_use]
    pub fn two_letter(&self) -> Option<&str> {
        self.two_letter.as_deref()
    }

    /// Returns the three-letter code, if any.
    #[must_use]
    pub fn three_letter(&self) -> Option<&str> {
        self.three_letter.as_deref()
    }

    /// Returns the numeric code, if any.
    #[must_use]
    pub const fn numeric_code(&self) -> Option<u16> {
        self.numeric_code
    }

    /// Returns the record category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}
