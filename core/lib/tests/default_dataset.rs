use httpstatus::{Error, Locale, StatusRegistry};

#[test]
fn canonical_phrases() {
    let registry = StatusRegistry::new();
    assert_eq!(registry.reason_phrase(100), Ok("Continue"));
    assert_eq!(registry.reason_phrase(200), Ok("OK"));
    assert_eq!(registry.reason_phrase(404), Ok("Not Found"));
    assert_eq!(registry.reason_phrase(418), Err(Error::UnknownCode(418)));
    assert_eq!(registry.reason_phrase(511), Ok("Network Authentication Required"));
}

#[test]
fn full_table_round_trip() {
    let registry = StatusRegistry::new();
    assert_eq!(registry.len(), Locale::English.table().len());

    for &(code, phrase) in Locale::English.table() {
        assert_eq!(registry.reason_phrase(code), Ok(phrase));
        assert_eq!(registry.status_code(phrase), Ok(code));
        assert_eq!(registry.status_code(&phrase.to_lowercase()), Ok(code));
        assert_eq!(registry.status_code(&phrase.to_uppercase()), Ok(code));
        assert!(registry.has_code(code));
        assert!(registry.has_reason_phrase(phrase));
    }
}

#[test]
fn iteration_matches_the_base_table() {
    let registry = StatusRegistry::new();
    let entries: Vec<(u16, &str)> = registry.iter().collect();
    assert_eq!(entries, Locale::English.table());
}

#[test]
fn reserved_and_unregistered_codes() {
    let registry = StatusRegistry::new();
    for code in [306, 418, 425, 451, 499, 600] {
        assert_eq!(registry.reason_phrase(code), Err(Error::UnknownCode(code)));
        assert!(!registry.has_code(code));
    }

    assert_eq!(
        registry.status_code("I'm a teapot"),
        Err(Error::UnknownPhrase("I'm a teapot".to_string())),
    );
}

#[test]
fn error_taxonomy_is_distinguishable() {
    let registry = StatusRegistry::new();

    let invalid = registry.reason_phrase(1000).unwrap_err();
    assert!(invalid.is_invalid_input());
    assert!(!invalid.is_not_found());
    assert_eq!(
        invalid.to_string(),
        "invalid status code 1000: must be an integer between 100 and 999",
    );

    let missing = registry.reason_phrase(600).unwrap_err();
    assert!(missing.is_not_found());
    assert!(!missing.is_invalid_input());
    assert_eq!(missing.to_string(), "unknown status code: `600`");

    let unmatched = registry.status_code("Missing Phrase").unwrap_err();
    assert!(unmatched.is_not_found());
    assert_eq!(unmatched.to_string(), "no status code is associated to `Missing Phrase`");
}
