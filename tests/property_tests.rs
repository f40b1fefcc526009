//! Property-based tests for rust_syslog_logger using proptest

use proptest::prelude::*;
use rust_syslog_logger::core::escape_param_value;
use rust_syslog_logger::prelude::*;

fn facility() -> impl Strategy<Value = Facility> {
    (0u8..24).prop_map(|code| Facility::try_from(code).unwrap())
}

fn severity() -> impl Strategy<Value = Severity> {
    (0u8..8).prop_map(|code| Severity::try_from(code).unwrap())
}

/// Reverse of the structured data escaping; `None` if an escapable
/// character appears unescaped
fn unescape(escaped: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?),
            '"' | ']' => return None,
            other => out.push(other),
        }
    }
    Some(out)
}

// ============================================================================
// Priority Tests
// ============================================================================

proptest! {
    /// PRI code is facility * 8 + severity and never exceeds 191
    #[test]
    fn test_priority_code(facility in facility(), severity in severity()) {
        let priority = Priority::new(facility, severity);
        let code = priority.code();

        prop_assert_eq!(code, facility.code() * 8 + severity.code());
        prop_assert!(code <= 191);
        prop_assert_eq!(priority.to_string(), format!("<{}>", code));
    }

    /// Facility and severity codes survive the u8 conversion
    #[test]
    fn test_code_roundtrip(facility in facility(), severity in severity()) {
        prop_assert_eq!(Facility::try_from(u8::from(facility)).unwrap(), facility);
        prop_assert_eq!(Severity::try_from(u8::from(severity)).unwrap(), severity);
    }

    /// Codes past the defined range are rejected
    #[test]
    fn test_out_of_range_codes(code in 24u8..) {
        prop_assert!(Facility::try_from(code).is_err());
        prop_assert!(Severity::try_from(code).is_err());
    }

    /// Names parse back to the same value
    #[test]
    fn test_name_roundtrip(facility in facility(), severity in severity()) {
        prop_assert_eq!(facility.as_str().parse::<Facility>().unwrap(), facility);
        prop_assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
    }
}

// ============================================================================
// Structured Data Escaping Tests
// ============================================================================

proptest! {
    /// Escaping is reversible and leaves no bare `"` or `]`
    #[test]
    fn test_escape_reversible(value in ".*") {
        let escaped = escape_param_value(&value);
        prop_assert_eq!(unescape(&escaped), Some(value));
    }

    /// Values without escapable characters are untouched
    #[test]
    fn test_escape_identity(value in "[a-zA-Z0-9 .,:;@=_-]*") {
        prop_assert_eq!(escape_param_value(&value), value);
    }

    /// A rendered parameter is always `name="..."`
    #[test]
    fn test_param_rendering(name in "[a-zA-Z][a-zA-Z0-9]{0,15}", value in ".*") {
        let rendered = MetadataParam::new(name.clone(), value.clone()).to_string();
        let prefix = format!("{}=\"", name);

        prop_assert!(rendered.starts_with(&prefix));
        prop_assert!(rendered.ends_with('"'));
        let inner = &rendered[prefix.len()..rendered.len() - 1];
        prop_assert_eq!(unescape(inner), Some(value));
    }
}

// ============================================================================
// Optional Tests
// ============================================================================

proptest! {
    #[test]
    fn test_optional_int_json_roundtrip(value in any::<Option<i64>>()) {
        let opt = Optional::from(value);
        let json = opt.to_json().unwrap();

        prop_assert_eq!(Optional::<i64>::from_json(&json).unwrap(), opt);
        prop_assert_eq!(value.is_none(), json == "null");
    }

    #[test]
    fn test_optional_string_json_roundtrip(value in any::<Option<String>>()) {
        let opt = Optional::from(value);
        let json = opt.to_json().unwrap();

        prop_assert_eq!(Optional::<String>::from_json(&json).unwrap(), opt);
    }

    /// The placeholder is `-` only for absent values
    #[test]
    fn test_optional_placeholder(value in any::<Option<u32>>()) {
        let opt = Optional::from(value);
        let expected = value.map_or_else(|| "-".to_string(), |v| v.to_string());

        prop_assert_eq!(opt.placeholder().to_string(), expected);
    }
}

// ============================================================================
// Message Tests
// ============================================================================

proptest! {
    /// Rendering the same message twice yields the same text
    #[test]
    fn test_message_text_idempotent(
        facility in facility(),
        severity in severity(),
        host in proptest::option::of("[a-z]{1,12}"),
        payload in proptest::collection::vec(".*", 0..5),
    ) {
        let mut header = Header::minimal(Priority::new(facility, severity), Version::V1);
        if let Some(host) = host {
            header = header.with_host_name(host);
        }
        let message = Message::new(
            header,
            Vec::new(),
            payload.into_iter().map(PayloadValue::from).collect(),
        );

        prop_assert_eq!(message.to_text(), message.to_text());
    }

    /// Payload elements follow the structured data, each after one space
    #[test]
    fn test_payload_joining(payload in proptest::collection::vec("[^ ]*", 0..6)) {
        let message = Message::new(
            Header::minimal(Priority::new(Facility::Local4, Severity::Notice), Version::V1),
            Vec::new(),
            payload.iter().map(PayloadValue::from).collect(),
        );

        let mut expected = String::from("<165>1 - - - - - -");
        for element in &payload {
            expected.push(' ');
            expected.push_str(element);
        }
        prop_assert_eq!(message.to_text(), expected);
    }

    /// JSON round-trip preserves the wire text
    #[test]
    fn test_json_preserves_text(
        facility in facility(),
        severity in severity(),
        app in proptest::option::of("[a-z]{1,12}"),
        ints in proptest::collection::vec(any::<i64>(), 0..4),
    ) {
        let mut header = Header::minimal(Priority::new(facility, severity), Version::V1);
        if let Some(app) = app {
            header = header.with_app_name(app);
        }
        let message = Message::new(
            header,
            vec![Metadata::new("prop@1").with_param("k", "v]")],
            ints.into_iter().map(PayloadValue::from).collect(),
        );

        let decoded = Message::from_json(&message.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded.to_text(), message.to_text());
    }
}
