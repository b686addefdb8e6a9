#![cfg(feature = "serde")]

use httpstatus::{Locale, ResponseClass, StatusRegistry};

#[test]
fn locale_as_identifier() {
    assert_eq!(serde_json::to_string(&Locale::French).unwrap(), r#""fr""#);
    assert_eq!(serde_json::from_str::<Locale>(r#""de""#).unwrap(), Locale::German);
    assert!(serde_json::from_str::<Locale>(r#""xx""#).is_err());
}

#[test]
fn response_class_as_identifier() {
    assert_eq!(serde_json::to_string(&ResponseClass::ClientError).unwrap(), r#""client-error""#);
    assert_eq!(
        serde_json::from_str::<ResponseClass>(r#""custom""#).unwrap(),
        ResponseClass::Custom,
    );
    assert!(serde_json::from_str::<ResponseClass>(r#""2xx""#).is_err());
}

#[test]
fn registry_round_trips_through_a_map() {
    let mut registry = StatusRegistry::new();
    registry.merge(600, "Custom Error").unwrap();
    registry.merge(404, "Look Somewhere Else").unwrap();

    let json = serde_json::to_string(&registry).unwrap();
    let back: StatusRegistry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, registry);
}

#[test]
fn registry_deserialization_validates() {
    // Out of range.
    assert!(serde_json::from_str::<StatusRegistry>(r#"{"1000": "Nope"}"#).is_err());

    // "Not Found" is already bound to 404.
    assert!(serde_json::from_str::<StatusRegistry>(r#"{"450": "Not Found"}"#).is_err());

    // Valid overrides merge onto the default table.
    let registry: StatusRegistry = serde_json::from_str(r#"{"600": "Custom Error"}"#).unwrap();
    assert_eq!(registry.reason_phrase(600), Ok("Custom Error"));
    assert_eq!(registry.reason_phrase(404), Ok("Not Found"));
}
