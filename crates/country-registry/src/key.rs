//! Lookup keys and their resolution to a single index.

/// A key accepted by registry lookups.
///
/// Integers and text both convert into a key. Text that parses as an integer
/// is resolved as a numeric code, so `"276"` and `276` find the same record.
///
/// ```
/// use country_registry::LookupKey;
///
/// assert_eq!(LookupKey::from(276_u16), LookupKey::Numeric(276));
/// assert_eq!(LookupKey::from("de"), LookupKey::Text("de"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKey<'a> {
    /// An integer numeric code.
    Numeric(i64),
    /// A two-letter code, three-letter code, or numeric code as text.
    Text(&'a str),
}

/// The single index a key is looked up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolvedKey {
    Numeric(i64),
    TwoLetter(String),
    ThreeLetter(String),
}

impl LookupKey<'_> {
    /// Picks the index for this key.
    ///
    /// Integers, and text that parses as one once trimmed, go to the numeric
    /// index. Other text is lowercased and goes to the two-letter index when
    /// it is two characters long, otherwise to the three-letter index.
    pub(crate) fn resolve(self) -> ResolvedKey {
        match self {
            Self::Numeric(value) => ResolvedKey::Numeric(value),
            Self::Text(text) => {
                let trimmed = text.trim();
                if let Ok(value) = trimmed.parse::<i64>() {
                    return ResolvedKey::Numeric(value);
                }
                let code = trimmed.to_lowercase();
                if code.chars().count() == 2 {
                    ResolvedKey::TwoLetter(code)
                } else {
                    ResolvedKey::ThreeLetter(code)
                }
            }
        }
    }
}

impl<'a> From<&'a str> for LookupKey<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for LookupKey<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

macro_rules! numeric_key_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for LookupKey<'_> {
                fn from(value: $ty) -> Self {
                    Self::Numeric(i64::from(value))
                }
            }
        )+
    };
}

numeric_key_from!(u8, u16, u32, i8, i16, i32, i64);
