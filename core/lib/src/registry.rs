use std::fmt;

use indexmap::IndexMap;
use uncased::UncasedStr;

use crate::class::ResponseClass;
use crate::error::Error;
use crate::locale::Locale;

/// A registry of HTTP status codes and their reason phrases.
///
/// A registry is seeded from one locale's built-in table and afterwards
/// mutated only through [`merge()`](StatusRegistry::merge), which validates
/// its inputs and preserves the registry's one invariant: no two codes ever
/// share a reason phrase, compared ASCII case-insensitively. There is no
/// deletion; every other operation is a read.
///
/// # Example
///
/// ```rust
/// use httpstatus::StatusRegistry;
///
/// let mut registry = StatusRegistry::new();
/// assert_eq!(registry.reason_phrase(200), Ok("OK"));
/// assert_eq!(registry.status_code("NOT FOUND"), Ok(404));
///
/// // Overriding a phrase and extending the table.
/// registry.merge(404, "Look Somewhere Else")?;
/// registry.merge(799, "Not A Teapot")?;
/// assert_eq!(registry.reason_phrase(404), Ok("Look Somewhere Else"));
/// # Ok::<_, httpstatus::Error>(())
/// ```
///
/// # Ordering
///
/// Iteration yields entries in insertion order: the base table's order (it is
/// sorted by code), followed by custom codes in the order they were merged.
/// Overwriting a code's phrase does not move the entry.
///
/// # Concurrency
///
/// A registry is a plain in-memory value. Concurrent reads need no
/// synchronization; `merge()` performs a check-then-insert sequence and
/// therefore requires exclusive access, which `&mut self` already enforces
/// within a single thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRegistry {
    entries: IndexMap<u16, String>,
}

impl StatusRegistry {
    /// The smallest valid status code.
    pub const MIN_CODE: u16 = 100;

    /// The largest valid status code.
    ///
    /// Codes from 600 through this ceiling are outside the standard `1XX`
    /// through `5XX` bands but remain valid, storable custom codes. Anything
    /// above is rejected by every entry point.
    pub const MAX_CODE: u16 = 999;

    /// Creates a registry seeded with the default locale's table
    /// ([`Locale::English`]).
    pub fn new() -> StatusRegistry {
        StatusRegistry::with_locale(Locale::default())
    }

    /// Creates a registry seeded with `locale`'s built-in table.
    ///
    /// ```rust
    /// use httpstatus::{Locale, StatusRegistry};
    ///
    /// let registry = StatusRegistry::with_locale(Locale::French);
    /// assert_eq!(registry.reason_phrase(404), Ok("Non trouvé"));
    /// ```
    pub fn with_locale(locale: Locale) -> StatusRegistry {
        let entries = locale.table().iter()
            .map(|&(code, phrase)| (code, phrase.to_string()))
            .collect();

        StatusRegistry { entries }
    }

    /// Creates a registry seeded with `locale`'s table, then applies each
    /// `(code, phrase)` pair in `overrides` via
    /// [`merge()`](StatusRegistry::merge), in iteration order.
    ///
    /// The first failing pair aborts construction and its error is returned;
    /// no partially-overridden registry is ever observable. Order matters: an
    /// early override can free up a phrase that a later one reuses.
    ///
    /// ```rust
    /// use httpstatus::{Locale, StatusRegistry};
    ///
    /// let registry = StatusRegistry::with_overrides(Locale::English, [
    ///     (100, "New Continue"),
    ///     (101, "Continue"),       // valid: 100 no longer owns "Continue"
    /// ])?;
    ///
    /// assert_eq!(registry.status_code("continue"), Ok(101));
    /// # Ok::<_, httpstatus::Error>(())
    /// ```
    pub fn with_overrides<I, P>(locale: Locale, overrides: I) -> Result<StatusRegistry, Error>
        where I: IntoIterator<Item = (u16, P)>, P: AsRef<str>
    {
        let mut registry = StatusRegistry::with_locale(locale);
        for (code, phrase) in overrides {
            registry.merge(code, phrase)?;
        }

        Ok(registry)
    }

    /// Adds or updates the entry for `code`, binding it to the trimmed
    /// `phrase`.
    ///
    /// The code must be in range, and the phrase must not contain CR or LF.
    /// If the phrase is already bound to a *different* code, the merge fails
    /// with [`Error::DuplicatePhrase`] and the registry is left untouched.
    /// Re-binding a code's own phrase is an in-place update, so merging the
    /// same pair twice is idempotent.
    pub fn merge<P: AsRef<str>>(&mut self, code: u16, phrase: P) -> Result<(), Error> {
        let code = filter_code(code)?;
        let phrase = filter_phrase(phrase.as_ref())?;
        if let Some(existing) = self.scan(phrase) {
            if existing != code {
                return Err(Error::DuplicatePhrase {
                    phrase: phrase.to_string(),
                    existing,
                });
            }
        }

        self.entries.insert(code, phrase.to_string());
        Ok(())
    }

    /// Returns the reason phrase registered for `code`, verbatim.
    ///
    /// Fails with [`Error::OutOfRangeCode`] for codes outside the valid range
    /// and [`Error::UnknownCode`] for valid codes with no entry.
    pub fn reason_phrase(&self, code: u16) -> Result<&str, Error> {
        let code = filter_code(code)?;
        self.entries.get(&code)
            .map(|phrase| phrase.as_str())
            .ok_or(Error::UnknownCode(code))
    }

    /// Returns the first code whose phrase matches `phrase`, compared ASCII
    /// case-insensitively against the trimmed input, scanning in iteration
    /// order.
    ///
    /// Fails with [`Error::MalformedPhrase`] if `phrase` contains CR or LF
    /// and [`Error::UnknownPhrase`] if nothing matches.
    pub fn status_code(&self, phrase: &str) -> Result<u16, Error> {
        let phrase = filter_phrase(phrase)?;
        self.scan(phrase).ok_or_else(|| Error::UnknownPhrase(phrase.to_string()))
    }

    /// Returns `true` if `code` has a registered phrase.
    ///
    /// Unlike [`reason_phrase()`](StatusRegistry::reason_phrase), this never
    /// fails: an out-of-range code is simply `false`.
    pub fn has_code(&self, code: u16) -> bool {
        filter_code(code).map(|code| self.entries.contains_key(&code)).unwrap_or(false)
    }

    /// Returns `true` if any entry's phrase matches `phrase`
    /// case-insensitively.
    ///
    /// Unlike [`status_code()`](StatusRegistry::status_code), this never
    /// fails: a phrase containing CR or LF is simply `false`.
    pub fn has_reason_phrase(&self, phrase: &str) -> bool {
        filter_phrase(phrase).map(|phrase| self.scan(phrase).is_some()).unwrap_or(false)
    }

    /// Classifies `code` against this registry's live contents.
    ///
    /// Codes in the standard bands classify by leading digit when registered
    /// and as [`ResponseClass::Unassigned`] when not; codes of 600 and above
    /// are [`ResponseClass::Custom`] regardless of registration. Fails only
    /// for out-of-range codes.
    ///
    /// ```rust
    /// use httpstatus::{ResponseClass, StatusRegistry};
    ///
    /// let registry = StatusRegistry::new();
    /// assert_eq!(registry.classify(404), Ok(ResponseClass::ClientError));
    /// assert_eq!(registry.classify(306), Ok(ResponseClass::Unassigned));
    /// assert_eq!(registry.classify(606), Ok(ResponseClass::Custom));
    /// ```
    pub fn classify(&self, code: u16) -> Result<ResponseClass, Error> {
        let code = filter_code(code)?;
        match ResponseClass::from_band(code) {
            ResponseClass::Custom => Ok(ResponseClass::Custom),
            class if self.entries.contains_key(&code) => Ok(class),
            _ => Ok(ResponseClass::Unassigned),
        }
    }

    /// Returns `true` if `code` is in the informational band, `100..200`.
    pub fn is_informational(&self, code: u16) -> bool {
        matches!(code, 100..=199)
    }

    /// Returns `true` if `code` is in the success band, `200..300`.
    pub fn is_success(&self, code: u16) -> bool {
        matches!(code, 200..=299)
    }

    /// Returns `true` if `code` is in the redirection band, `300..400`.
    pub fn is_redirection(&self, code: u16) -> bool {
        matches!(code, 300..=399)
    }

    /// Returns `true` if `code` is in the client error band, `400..500`.
    pub fn is_client_error(&self, code: u16) -> bool {
        matches!(code, 400..=499)
    }

    /// Returns `true` if `code` is in the server error band, `500..600`.
    pub fn is_server_error(&self, code: u16) -> bool {
        matches!(code, 500..=599)
    }

    /// Returns `true` if `code` is a valid code above the standard bands:
    /// `600` through [`MAX_CODE`](StatusRegistry::MAX_CODE).
    pub fn is_custom(&self, code: u16) -> bool {
        matches!(code, 600..=StatusRegistry::MAX_CODE)
    }

    /// Returns `true` if `code` sits inside a standard band but has no entry
    /// in this registry.
    ///
    /// This is the one range predicate that depends on the registry's live
    /// contents: merging an entry for `code` flips it to `false`.
    ///
    /// ```rust
    /// use httpstatus::StatusRegistry;
    ///
    /// let registry = StatusRegistry::new();
    /// assert!(registry.is_unassigned(306));
    /// assert!(!registry.is_unassigned(307));
    /// ```
    pub fn is_unassigned(&self, code: u16) -> bool {
        matches!(code, 100..=599) && !self.entries.contains_key(&code)
    }

    /// The number of registered codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry has no entries. Never the case for a
    /// registry seeded from a built-in table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(code, phrase)` entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    /// First code bound to `phrase`, in iteration order.
    fn scan(&self, phrase: &str) -> Option<u16> {
        let phrase = UncasedStr::new(phrase);
        self.entries.iter()
            .find(|(_, candidate)| UncasedStr::new(candidate.as_str()) == phrase)
            .map(|(&code, _)| code)
    }
}

impl Default for StatusRegistry {
    fn default() -> StatusRegistry {
        StatusRegistry::new()
    }
}

impl<'a> IntoIterator for &'a StatusRegistry {
    type Item = (u16, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over a registry's `(code, phrase)` entries, returned by
/// [`StatusRegistry::iter()`].
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, u16, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (u16, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&code, phrase)| (code, phrase.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> { }

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").finish_non_exhaustive()
    }
}

fn filter_code(code: u16) -> Result<u16, Error> {
    if code < StatusRegistry::MIN_CODE || code > StatusRegistry::MAX_CODE {
        return Err(Error::OutOfRangeCode(code));
    }

    Ok(code)
}

fn filter_phrase(phrase: &str) -> Result<&str, Error> {
    let phrase = phrase.trim();
    if phrase.contains(['\r', '\n']) {
        return Err(Error::MalformedPhrase(phrase.to_string()));
    }

    Ok(phrase)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::ser::SerializeMap;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::StatusRegistry;

    /// Serializes as a code to phrase map, in iteration order.
    impl Serialize for StatusRegistry {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            let mut map = ser.serialize_map(Some(self.len()))?;
            for (code, phrase) in self {
                map.serialize_entry(&code, phrase)?;
            }

            map.end()
        }
    }

    /// Deserializes a code to phrase map as overrides to the default table,
    /// routed through `merge()`: out-of-range codes, CR/LF phrases, and
    /// phrase conflicts are deserialization errors.
    impl<'de> Deserialize<'de> for StatusRegistry {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            struct Visitor;

            impl<'de> de::Visitor<'de> for Visitor {
                type Value = StatusRegistry;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map of status codes to reason phrases")
                }

                fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                    let mut registry = StatusRegistry::new();
                    while let Some((code, phrase)) = map.next_entry::<u16, String>()? {
                        registry.merge(code, &phrase).map_err(de::Error::custom)?;
                    }

                    Ok(registry)
                }
            }

            de.deserialize_map(Visitor)
        }
    }
}
