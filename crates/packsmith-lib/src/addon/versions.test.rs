use super::*;
use proptest::prelude::*;

#[test]
fn test_parse_valid_version() {
    let version = VersionTriple::parse("1.21.110").unwrap();
    assert_eq!(version, VersionTriple::new(1, 21, 110));
    assert_eq!(version.label(), "v1.21.110");
}

#[test]
fn test_missing_version_uses_fallback() {
    let version = resolve_version(None).unwrap();
    assert_eq!(version, VersionTriple::new(0, 0, 1));
    assert_eq!(version.label(), "v0.0.1");
}

#[test]
fn test_parse_rejects_wrong_component_count() {
    for raw in ["1.2", "1", "1.2.3.4", ""] {
        assert!(
            matches!(
                VersionTriple::parse(raw),
                Err(ConfigError::InvalidVersion { .. })
            ),
            "'{}' should be rejected",
            raw
        );
    }
}

#[test]
fn test_parse_rejects_non_integer_components() {
    for raw in ["1.2.x", "a.b.c", "1.-2.3", "1.2.3-beta", "1.2.3+build5"] {
        assert!(VersionTriple::parse(raw).is_err(), "'{}' should be rejected", raw);
    }
}

#[test]
fn test_parse_rejects_leading_zeros() {
    for raw in ["1.02.3", "01.2.3", "1.2.03"] {
        match VersionTriple::parse(raw) {
            Err(ConfigError::InvalidVersion { value, reason }) => {
                assert_eq!(value, raw);
                assert!(reason.contains("leading zero"), "unexpected reason: {}", reason);
            }
            other => panic!("Expected '{}' to be rejected, got {:?}", raw, other),
        }
    }
    assert_eq!(VersionTriple::parse("1.0.3").unwrap(), VersionTriple::new(1, 0, 3));
}

#[test]
fn test_invalid_version_error_carries_value() {
    match resolve_version(Some("1.2.x")) {
        Err(ConfigError::InvalidVersion { value, .. }) => assert_eq!(value, "1.2.x"),
        other => panic!("Expected InvalidVersion, got {:?}", other),
    }
}

#[test]
fn test_version_serializes_as_array() {
    let json = serde_json::to_string(&VersionTriple::new(2, 0, 13)).unwrap();
    assert_eq!(json, "[2,0,13]");

    let parsed: VersionTriple = serde_json::from_str("[1,21,110]").unwrap();
    assert_eq!(parsed, VersionTriple::new(1, 21, 110));
}

#[test]
fn test_versions_order_numerically() {
    assert!(VersionTriple::parse("1.10.0").unwrap() > VersionTriple::parse("1.9.9").unwrap());
}

proptest! {
    #[test]
    fn prop_label_round_trips_parse(major in 0u64..100_000, minor in 0u64..100_000, patch in 0u64..100_000) {
        let raw = format!("{}.{}.{}", major, minor, patch);
        let version = VersionTriple::parse(&raw).unwrap();
        prop_assert_eq!(version.label(), format!("v{}", raw));
    }

    #[test]
    fn prop_two_components_never_parse(major in 0u64..1000, minor in 0u64..1000) {
        let raw = format!("{}.{}", major, minor);
        prop_assert!(VersionTriple::parse(&raw).is_err());
    }
}
