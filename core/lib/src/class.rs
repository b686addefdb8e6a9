use std::fmt;

/// Classification of an HTTP status code by its numeric range.
///
/// The five standard classes follow the code's leading digit. The two
/// extended classes cover everything else a registry can be asked about:
/// [`Custom`](ResponseClass::Custom) for codes beyond the standard bands, and
/// [`Unassigned`](ResponseClass::Unassigned) for codes that sit inside a
/// standard band but have no entry in the registry that classified them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseClass {
    /// Informational responses: `1XX`.
    Informational,
    /// Success responses: `2XX`.
    Success,
    /// Redirection responses: `3XX`.
    Redirection,
    /// Client error responses: `4XX`.
    ClientError,
    /// Server error responses: `5XX`.
    ServerError,
    /// Non-standard codes above the `5XX` band, `600` and up.
    Custom,
    /// Codes inside a standard band with no registered phrase.
    Unassigned,
}

macro_rules! class_check_fn {
    ($func:ident, $type:literal, $variant:ident) => (
        #[doc = concat!("Returns `true` if `self` is `ResponseClass::", stringify!($variant),
            "` (", $type, ").")]
        #[inline(always)]
        pub const fn $func(self) -> bool {
            matches!(self, ResponseClass::$variant)
        }
    )
}

impl ResponseClass {
    class_check_fn!(is_informational, "`1XX`", Informational);
    class_check_fn!(is_success, "`2XX`", Success);
    class_check_fn!(is_redirection, "`3XX`", Redirection);
    class_check_fn!(is_client_error, "`4XX`", ClientError);
    class_check_fn!(is_server_error, "`5XX`", ServerError);
    class_check_fn!(is_custom, "`600` and beyond", Custom);
    class_check_fn!(is_unassigned, "in-band but unregistered", Unassigned);

    /// Classification by numeric band alone. Codes outside the standard bands
    /// land in `Custom`; `Unassigned` is never produced here since it depends
    /// on registry contents.
    pub(crate) const fn from_band(code: u16) -> ResponseClass {
        match code {
            100..=199 => ResponseClass::Informational,
            200..=299 => ResponseClass::Success,
            300..=399 => ResponseClass::Redirection,
            400..=499 => ResponseClass::ClientError,
            500..=599 => ResponseClass::ServerError,
            _ => ResponseClass::Custom,
        }
    }

    /// Returns the class identifier: `"informational"`, `"success"`,
    /// `"redirection"`, `"client-error"`, `"server-error"`, `"custom"`, or
    /// `"unassigned"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResponseClass::Informational => "informational",
            ResponseClass::Success => "success",
            ResponseClass::Redirection => "redirection",
            ResponseClass::ClientError => "client-error",
            ResponseClass::ServerError => "server-error",
            ResponseClass::Custom => "custom",
            ResponseClass::Unassigned => "unassigned",
        }
    }
}

impl fmt::Display for ResponseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::ResponseClass;

    impl Serialize for ResponseClass {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            ser.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for ResponseClass {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            struct Visitor;

            const E: &str = "a response class identifier such as \"informational\" or \"client-error\"";

            impl<'de> de::Visitor<'de> for Visitor {
                type Value = ResponseClass;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(E)
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                    let class = match v {
                        "informational" => ResponseClass::Informational,
                        "success" => ResponseClass::Success,
                        "redirection" => ResponseClass::Redirection,
                        "client-error" => ResponseClass::ClientError,
                        "server-error" => ResponseClass::ServerError,
                        "custom" => ResponseClass::Custom,
                        "unassigned" => ResponseClass::Unassigned,
                        _ => return Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                    };

                    Ok(class)
                }
            }

            de.deserialize_str(Visitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResponseClass;

    #[test]
    fn band_classification() {
        assert_eq!(ResponseClass::from_band(100), ResponseClass::Informational);
        assert_eq!(ResponseClass::from_band(199), ResponseClass::Informational);
        assert_eq!(ResponseClass::from_band(200), ResponseClass::Success);
        assert_eq!(ResponseClass::from_band(306), ResponseClass::Redirection);
        assert_eq!(ResponseClass::from_band(404), ResponseClass::ClientError);
        assert_eq!(ResponseClass::from_band(599), ResponseClass::ServerError);
        assert_eq!(ResponseClass::from_band(600), ResponseClass::Custom);
        assert_eq!(ResponseClass::from_band(999), ResponseClass::Custom);
    }

    #[test]
    fn identity_checks() {
        assert!(ResponseClass::Informational.is_informational());
        assert!(!ResponseClass::Success.is_informational());
        assert!(ResponseClass::Custom.is_custom());
        assert!(ResponseClass::Unassigned.is_unassigned());
        assert!(!ResponseClass::Unassigned.is_server_error());
    }
}
