//! Supported locales and their built-in status code tables.

mod de;
mod en;
mod fr;

use std::fmt;
use std::str::FromStr;

use uncased::UncasedStr;

use crate::error::ParseLocaleError;

/// A locale with a built-in code to reason phrase table.
///
/// The set of supported locales is fixed and enumerated here; each variant is
/// bound statically to its dataset via [`Locale::table()`]. Identifiers parse
/// through `FromStr` ASCII case-insensitively:
///
/// ```rust
/// use httpstatus::Locale;
///
/// assert_eq!("en".parse(), Ok(Locale::English));
/// assert_eq!("FR".parse(), Ok(Locale::French));
/// assert!("pt".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// `en`: English, the default.
    #[default]
    English,
    /// `fr`: French.
    French,
    /// `de`: German.
    German,
}

impl Locale {
    /// All supported locales, in identifier order.
    pub const ALL: &'static [Locale] = &[Locale::German, Locale::English, Locale::French];

    /// Returns the locale's identifier: `"en"`, `"fr"`, or `"de"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::German => "de",
        }
    }

    /// The built-in code to phrase table for this locale, ordered by code.
    ///
    /// Tables are complete per locale and differ slightly in coverage: the
    /// English table carries the 57 codes of the IANA registry snapshot the
    /// data derives from, while the French and German tables additionally
    /// include 418, 425, and 451.
    pub const fn table(self) -> &'static [(u16, &'static str)] {
        match self {
            Locale::English => en::TABLE,
            Locale::French => fr::TABLE,
            Locale::German => de::TABLE,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident = UncasedStr::new(s);
        Locale::ALL.iter()
            .find(|locale| ident == locale.as_str())
            .copied()
            .ok_or_else(|| ParseLocaleError { input: s.to_string() })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Locale;

    impl Serialize for Locale {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            ser.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Locale {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            struct Visitor;

            impl<'de> de::Visitor<'de> for Visitor {
                type Value = Locale;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "a supported locale identifier (\"en\", \"fr\", or \"de\")")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                    v.parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }

            de.deserialize_str(Visitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn identifier_round_trip() {
        for &locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(locale));
            assert_eq!(locale.to_string(), locale.as_str());
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("EN".parse(), Ok(Locale::English));
        assert_eq!("De".parse(), Ok(Locale::German));
    }

    #[test]
    fn unsupported_identifiers_fail() {
        for ident in ["", "english", "pt", "en-US", "xx"] {
            let error = ident.parse::<Locale>().unwrap_err();
            assert_eq!(error.input(), ident);
        }
    }

    #[test]
    fn tables_are_ordered_and_in_range() {
        for &locale in Locale::ALL {
            let table = locale.table();
            assert!(!table.is_empty());
            for window in table.windows(2) {
                assert!(window[0].0 < window[1].0, "{locale}: table out of order");
            }

            for &(code, phrase) in table {
                assert!((100..=999).contains(&code));
                assert!(!phrase.contains(['\r', '\n']));
                assert_eq!(phrase, phrase.trim());
            }
        }
    }
}
