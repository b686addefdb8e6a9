#![warn(rust_2018_idioms)]
#![warn(missing_docs)]

//! Lookup and validation for HTTP status codes and their reason phrases.
//!
//! This crate ships the complete table of standard HTTP status codes and
//! their canonical reason phrases, in several languages, behind a small
//! query API: code to phrase, phrase to code (case-insensitively), existence
//! checks, and classification of codes into their numeric response classes.
//! The table can be extended or overridden with custom entries through a
//! validating merge.
//!
//! The central type is [`StatusRegistry`]:
//!
//! ```rust
//! use httpstatus::{ResponseClass, StatusRegistry};
//!
//! let mut registry = StatusRegistry::new();
//! assert_eq!(registry.reason_phrase(404), Ok("Not Found"));
//! assert_eq!(registry.status_code("not found"), Ok(404));
//!
//! registry.merge(600, "Custom Error")?;
//! assert_eq!(registry.classify(600), Ok(ResponseClass::Custom));
//! # Ok::<_, httpstatus::Error>(())
//! ```
//!
//! This is a static reference data structure with a query API. It is not an
//! HTTP client or server: it performs no I/O and implements no protocol
//! behavior.

mod class;
mod error;
mod locale;
mod registry;

pub mod consts;

pub use crate::class::ResponseClass;
pub use crate::error::{Error, ParseLocaleError};
pub use crate::locale::Locale;
pub use crate::registry::{Iter, StatusRegistry};
