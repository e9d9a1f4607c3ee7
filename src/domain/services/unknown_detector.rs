//! Unknown-Location Detector
//!
//! Classifies stored device locations as "known" or "unknown" across the
//! sentinel strings that accumulated in production data over time, and
//! handles the legacy schema where a location field is itself a
//! JSON-encoded object string.

use crate::domain::entities::StoredLocation;
use serde_json::Value;

/// Strings used in place of real location data to mean "value deliberately
/// absent". Covers English casing variants, the Arabic UI's "not known" and
/// "not specified" phrases, and the usual stringified-nil artifacts.
const UNKNOWN_SENTINELS: &[&str] = &[
    "unknown",
    "Unknown",
    "UNKNOWN",
    "غير معروف",
    "غير محدد",
    "N/A",
    "n/a",
    "null",
    "undefined",
    "",
];

/// IP strings that can never be resolved and must not reach a provider.
const UNRESOLVABLE_IPS: &[&str] = &["", "Unknown", "unknown", "N/A"];

/// Whether a single value matches the unknown sentinel set.
pub fn is_unknown_value(value: &str) -> bool {
    UNKNOWN_SENTINELS.contains(&value.trim())
}

/// Whether a city/country pair is unknown.
///
/// Both fields must match the sentinel set: a record with a known city but
/// unknown country is not flagged by this base check.
pub fn is_unknown_location(city: &str, country: &str) -> bool {
    is_unknown_value(city) && is_unknown_value(country)
}

/// Whether an IP string is one of the recognized non-resolvable sentinels.
pub fn is_unresolvable_ip(ip: &str) -> bool {
    UNRESOLVABLE_IPS.contains(&ip.trim())
}

/// Whether a device's stored location should be treated as unknown.
///
/// Handles the legacy encoding where `city` or `country` is itself a
/// JSON-encoded object string produced by an earlier schema version. An
/// encoded field that fails to parse counts as unknown, keeping malformed
/// legacy data eligible for re-resolution; one that parses counts as
/// unknown if any value inside matches the sentinel set. When neither
/// field is encoded, the plain both-fields check applies.
pub fn has_unknown_stored_location(location: &StoredLocation) -> bool {
    let city = location.city.as_deref().unwrap_or("");
    let country = location.country.as_deref().unwrap_or("");

    let mut saw_encoded = false;
    for field in [city, country] {
        if !looks_json_encoded(field) {
            continue;
        }
        saw_encoded = true;
        match serde_json::from_str::<Value>(field) {
            Ok(parsed) => {
                if any_value_unknown(&parsed) {
                    return true;
                }
            }
            Err(_) => return true,
        }
    }

    if saw_encoded {
        return false;
    }

    is_unknown_location(city, country)
}

/// Whether a string is syntactically bracketed as a JSON object.
fn looks_json_encoded(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// Whether any string value inside a parsed JSON object is a sentinel.
fn any_value_unknown(parsed: &Value) -> bool {
    match parsed {
        Value::Object(map) => map.values().any(|v| match v {
            Value::String(s) => is_unknown_value(s),
            Value::Null => true,
            _ => false,
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(city: &str, country: &str) -> StoredLocation {
        StoredLocation {
            city: Some(city.to_string()),
            country: Some(country.to_string()),
        }
    }

    // ===== is_unknown_value Tests =====

    #[test]
    fn test_sentinel_variants() {
        for v in ["unknown", "Unknown", "UNKNOWN", "N/A", "n/a", "null", "undefined", ""] {
            assert!(is_unknown_value(v), "expected sentinel: {:?}", v);
        }
    }

    #[test]
    fn test_arabic_sentinels() {
        assert!(is_unknown_value("غير معروف"));
        assert!(is_unknown_value("غير محدد"));
    }

    #[test]
    fn test_real_values_are_known() {
        assert!(!is_unknown_value("Baghdad"));
        assert!(!is_unknown_value("IQ"));
        assert!(!is_unknown_value("بغداد"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(is_unknown_value("  Unknown  "));
        assert!(is_unknown_value("   "));
    }

    // ===== is_unknown_location Tests =====

    #[test]
    fn test_both_unknown() {
        assert!(is_unknown_location("Unknown", "Unknown"));
    }

    #[test]
    fn test_both_known() {
        assert!(!is_unknown_location("Baghdad", "IQ"));
    }

    #[test]
    fn test_only_country_unknown_is_not_flagged() {
        // Both fields must match for the base check.
        assert!(!is_unknown_location("Baghdad", "Unknown"));
    }

    #[test]
    fn test_only_city_unknown_is_not_flagged() {
        assert!(!is_unknown_location("Unknown", "IQ"));
    }

    #[test]
    fn test_mixed_sentinels_both_match() {
        assert!(is_unknown_location("N/A", "غير معروف"));
    }

    // ===== is_unresolvable_ip Tests =====

    #[test]
    fn test_unresolvable_ips() {
        for ip in ["", "Unknown", "unknown", "N/A", "  "] {
            assert!(is_unresolvable_ip(ip), "expected unresolvable: {:?}", ip);
        }
    }

    #[test]
    fn test_resolvable_ips() {
        assert!(!is_unresolvable_ip("8.8.8.8"));
        assert!(!is_unresolvable_ip("2001:4860:4860::8888"));
    }

    // ===== has_unknown_stored_location Tests =====

    #[test]
    fn test_plain_unknown_pair() {
        assert!(has_unknown_stored_location(&stored("Unknown", "Unknown")));
    }

    #[test]
    fn test_plain_known_pair() {
        assert!(!has_unknown_stored_location(&stored("Baghdad", "IQ")));
    }

    #[test]
    fn test_plain_partial_unknown_is_not_flagged() {
        assert!(!has_unknown_stored_location(&stored("Baghdad", "Unknown")));
    }

    #[test]
    fn test_missing_fields_are_unknown() {
        assert!(has_unknown_stored_location(&StoredLocation::default()));
    }

    #[test]
    fn test_legacy_encoded_unknown_city() {
        assert!(has_unknown_stored_location(&stored(
            r#"{"city":"unknown"}"#,
            "IQ"
        )));
    }

    #[test]
    fn test_legacy_encoded_known_city() {
        assert!(!has_unknown_stored_location(&stored(
            r#"{"city":"Baghdad"}"#,
            "IQ"
        )));
    }

    #[test]
    fn test_legacy_encoded_any_field_match() {
        // Any sentinel value inside the object flags the record, unlike
        // the both-fields base check.
        assert!(has_unknown_stored_location(&stored(
            r#"{"city":"Baghdad","country":"Unknown"}"#,
            "IQ"
        )));
    }

    #[test]
    fn test_legacy_encoded_arabic_sentinel() {
        assert!(has_unknown_stored_location(&stored(
            r#"{"city":"غير محدد"}"#,
            "IQ"
        )));
    }

    #[test]
    fn test_legacy_encoded_null_value() {
        assert!(has_unknown_stored_location(&stored(
            r#"{"city":null}"#,
            "IQ"
        )));
    }

    #[test]
    fn test_malformed_legacy_data_is_unknown() {
        // Malformed legacy data stays eligible for re-resolution.
        assert!(has_unknown_stored_location(&stored(
            r#"{"city": "Baghdad"#,
            "IQ"
        )));
    }

    #[test]
    fn test_truncated_brace_pair_is_unknown() {
        assert!(has_unknown_stored_location(&stored("{}", "{broken}")));
    }

    #[test]
    fn test_encoded_country_field() {
        assert!(has_unknown_stored_location(&stored(
            "Baghdad",
            r#"{"country":"N/A"}"#
        )));
    }

    #[test]
    fn test_encoded_fields_override_base_check() {
        // The encoded field parses clean, so the plain-sentinel country is
        // not consulted at all.
        assert!(!has_unknown_stored_location(&stored(
            r#"{"city":"Baghdad"}"#,
            "Unknown"
        )));
    }
}
