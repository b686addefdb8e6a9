//! Errors arising from registry validation, lookup, and merging.

use std::fmt;

use crate::registry::StatusRegistry;

/// The error type for [`StatusRegistry`] operations.
///
/// Every failure is deterministic: it signals either malformed input, a
/// well-formed query with no matching data, or a merge that would violate
/// the registry's phrase uniqueness invariant. The [`Error::is_invalid_input()`],
/// [`Error::is_not_found()`], and [`Error::is_conflict()`] methods expose this
/// three-way split so callers can distinguish "malformed query" from "valid
/// query, absent data" without matching on individual variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The status code falls outside the valid range of
    /// [`StatusRegistry::MIN_CODE`] to [`StatusRegistry::MAX_CODE`].
    OutOfRangeCode(u16),
    /// The reason phrase contains a carriage return or line feed.
    MalformedPhrase(String),
    /// The status code is well-formed but has no registered phrase.
    UnknownCode(u16),
    /// The reason phrase is well-formed but matches no registered code.
    UnknownPhrase(String),
    /// A merge attempted to bind a phrase already owned by another code.
    DuplicatePhrase {
        /// The phrase that is already present in the registry.
        phrase: String,
        /// The code the phrase is currently bound to.
        existing: u16,
    },
}

impl Error {
    /// Returns `true` if the error describes malformed input: a code outside
    /// the valid range or a phrase containing CR or LF.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::OutOfRangeCode(_) | Error::MalformedPhrase(_))
    }

    /// Returns `true` if the error describes a well-formed query for which no
    /// data is registered.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UnknownCode(_) | Error::UnknownPhrase(_))
    }

    /// Returns `true` if the error describes a rejected merge.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::DuplicatePhrase { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRangeCode(code) => {
                write!(f, "invalid status code {}: must be an integer between {} and {}",
                    code, StatusRegistry::MIN_CODE, StatusRegistry::MAX_CODE)
            }
            Error::MalformedPhrase(_) => {
                write!(f, "reason phrase contains a carriage return or line feed")
            }
            Error::UnknownCode(code) => write!(f, "unknown status code: `{code}`"),
            Error::UnknownPhrase(phrase) => {
                write!(f, "no status code is associated to `{phrase}`")
            }
            Error::DuplicatePhrase { phrase, existing } => {
                write!(f, "reason phrase `{phrase}` is already present under code {existing}")
            }
        }
    }
}

impl std::error::Error for Error { }

/// The error returned when parsing an unsupported locale identifier.
///
/// Returned by [`Locale`](crate::Locale)'s `FromStr` implementation; the set
/// of supported locales is fixed, so this is the only place an unrecognized
/// identifier can surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError {
    pub(crate) input: String,
}

impl ParseLocaleError {
    /// The identifier that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale identifier: `{}`", self.input)
    }
}

impl std::error::Error for ParseLocaleError { }
