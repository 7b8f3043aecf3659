//! Record categories and the mask used to filter lookups.
//!
//! Every record belongs to exactly one [`Category`]. Lookups take a
//! [`CategoryMask`], a union of categories, and only return records whose
//! category is part of the mask.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Classification of a registry record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An active country or territory.
    #[default]
    Regular,
    /// A superseded historical entity.
    Old,
    /// A statistical region or aggregate, not a country.
    Region,
}

impl Category {
    /// Returns the single-category mask for this category.
    #[must_use]
    pub const fn mask(self) -> CategoryMask {
        match self {
            Self::Regular => CategoryMask::REGULAR,
            Self::Old => CategoryMask::OLD,
            Self::Region => CategoryMask::REGION,
        }
    }

    /// Returns the lowercase name used in JSON and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Old => "old",
            Self::Region => "region",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A union of categories used to filter lookups.
    ///
    /// The default mask is [`CategoryMask::ANY`].
    ///
    /// ```
    /// use country_registry::{Category, CategoryMask};
    ///
    /// let mask = CategoryMask::REGULAR | CategoryMask::OLD;
    /// assert!(mask.matches(Category::Old));
    /// assert!(!mask.matches(Category::Region));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategoryMask: u8 {
        /// Active countries.
        const REGULAR = 0b001;
        /// Historical entities.
        const OLD = 0b010;
        /// Statistical regions.
        const REGION = 0b100;
        /// Every category.
        const ANY = Self::REGULAR.bits() | Self::OLD.bits() | Self::REGION.bits();
    }
}

impl Default for CategoryMask {
    fn default() -> Self {
        Self::ANY
    }
}

impl CategoryMask {
    /// Returns `true` if `category` is part of this mask.
    #[must_use]
    pub const fn matches(self, category: Category) -> bool {
        self.intersects(category.mask())
    }

    /// Checks that the mask is non-empty and sets only defined bits.
    ///
    /// Masks built with [`CategoryMask::from_bits_retain`] can carry
    /// undefined bits; lookups call this before touching the indexes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidCategoryMask`] for an empty mask or one
    /// with bits outside [`CategoryMask::ANY`].
    pub fn validate(self) -> Result<Self, RegistryError> {
        if self.is_empty() || !Self::ANY.contains(self) {
            return Err(RegistryError::InvalidCategoryMask {
                bits: u32::from(self.bits()),
            });
        }
        Ok(self)
    }
}

impl TryFrom<u32> for CategoryMask {
    type Error = RegistryError;

    /// Converts raw bits into a mask, rejecting zero and undefined bits.
    ///
    /// ```
    /// use country_registry::{CategoryMask, RegistryError};
    ///
    /// assert_eq!(CategoryMask::try_from(0b101), Ok(CategoryMask::REGULAR | CategoryMask::REGION));
    /// assert_eq!(
    ///     CategoryMask::try_from(0b1000),
    ///     Err(RegistryError::InvalidCategoryMask { bits: 0b1000 })
    /// );
    /// ```
    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        u8::try_from(bits)
            .ok()
            .and_then(Self::from_bits)
            .filter(|mask| !mask.is_empty())
            .ok_or(RegistryError::InvalidCategoryMask { bits })
    }
}

impl FromStr for CategoryMask {
    type Err = RegistryError;

    /// Parses `any`, a category name, a comma-separated union of names, or
    /// raw decimal bits.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(bits) = trimmed.parse::<u32>() {
            return Self::try_from(bits);
        }

        trimmed.split(',').try_fold(Self::empty(), |acc, part| {
            let flag = match part.trim().to_ascii_lowercase().as_str() {
                "any" | "all" => Self::ANY,
                "regular" => Self::REGULAR,
                "old" => Self::OLD,
                "region" => Self::REGION,
                _ => {
                    return Err(RegistryError::UnknownCategory {
                        value: part.trim().to_owned(),
                    });
                }
            };
            Ok(acc | flag)
        })
    }
}
