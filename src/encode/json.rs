//! The JSON POST body renderer.
//!
//! Produces a single flat object. Numbers are written from the preformatted
//! decimal text so fixed precisions survive (`"hdop":1.30`), which is why the
//! object is assembled by hand instead of going through a `serde_json::Value`
//! tree. Text values are escaped through `serde_json`'s string serializer;
//! older trackers spliced raw text into the body and produced broken JSON
//! when a driver id contained a quote.

use crate::encode::fields::{Field, FieldValue};
use chrono::{DateTime, SecondsFormat, Utc};

/// Formats epoch milliseconds as ISO-8601 UTC with millisecond precision,
/// e.g. `2023-11-14T22:13:20.123Z`. `None` for values outside chrono's
/// representable range.
pub(crate) fn iso8601(epoch_ms: u64) -> Option<String> {
    let ts = i64::try_from(epoch_ms).ok()?;
    let datetime: DateTime<Utc> = DateTime::from_timestamp_millis(ts)?;
    Some(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Renders `{"key":value,...}` in field-table order.
pub(crate) fn render_object(fields: &[Field]) -> String {
    let mut out = String::with_capacity(128);
    out.push('{');
    let mut first = true;
    for field in fields {
        let rendered = match &field.value {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()).to_string(),
            FieldValue::Decimal(d) => d.clone(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            // Receivers treat a missing charge key as "not charging", so the
            // false case is omitted here while query/form spell it out.
            FieldValue::Charge(true) => "true".to_string(),
            FieldValue::Charge(false) => continue,
            FieldValue::Timestamp(ts) => match iso8601(*ts) {
                Some(iso) => serde_json::Value::String(iso).to_string(),
                None => continue,
            },
        };
        if !first {
            out.push(',');
        }
        first = false;
        out.push('"');
        out.push_str(field.key);
        out.push_str("\":");
        out.push_str(&rendered);
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::fields::{SpeedRounding, position_fields};
    use crate::position::Position;
    use serde_json::Value;

    fn object(position: &Position) -> (String, Value) {
        let fields = position_fields("dev", position, SpeedRounding::Nearest, None);
        let body = render_object(&fields);
        let parsed = serde_json::from_str(&body).expect("body must be valid JSON");
        (body, parsed)
    }

    #[test]
    fn iso8601_has_millisecond_precision() {
        assert_eq!(
            iso8601(1_700_000_000_123).as_deref(),
            Some("2023-11-14T22:13:20.123Z")
        );
        assert_eq!(iso8601(0).as_deref(), Some("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn empty_position_renders_only_the_id() {
        let (body, _) = object(&Position::default());
        assert_eq!(body, r#"{"id":"dev"}"#);
    }

    #[test]
    fn numbers_keep_their_fixed_precision_textually() {
        let position = Position {
            latitude: Some(45.123_456_7),
            hdop: Some(1.3),
            altitude: Some(12.0),
            ..Position::default()
        };
        let (body, _) = object(&position);
        assert!(body.contains(r#""lat":45.1234567"#));
        assert!(body.contains(r#""hdop":1.30"#));
        assert!(body.contains(r#""altitude":12.0"#));
    }

    #[test]
    fn timestamp_renders_as_an_iso_string() {
        let position = Position {
            timestamp_ms: Some(1_700_000_000_123),
            ..Position::default()
        };
        let (body, parsed) = object(&position);
        assert!(body.contains(r#""timestamp":"2023-11-14T22:13:20.123Z""#));
        assert_eq!(parsed["timestamp"], "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn charge_false_is_omitted_but_battery_stays() {
        let position = Position {
            battery: Some(80),
            charging: false,
            ..Position::default()
        };
        let (body, parsed) = object(&position);
        assert_eq!(parsed["batt"], 80);
        assert!(!body.contains("charge"));
    }

    #[test]
    fn charge_true_is_kept() {
        let position = Position {
            battery: Some(80),
            charging: true,
            ..Position::default()
        };
        let (_, parsed) = object(&position);
        assert_eq!(parsed["charge"], true);
    }

    #[test]
    fn quotes_and_backslashes_in_text_fields_are_escaped() {
        let position = Position {
            event: Some(r#"said "stop"\now"#.into()),
            driver_unique_id: Some("tab\there".into()),
            ..Position::default()
        };
        let (_, parsed) = object(&position);
        assert_eq!(parsed["event"], r#"said "stop"\now"#);
        assert_eq!(parsed["driverUniqueId"], "tab\there");
    }

    #[test]
    fn valid_flag_renders_as_a_bare_boolean() {
        let position = Position {
            valid: Some(false),
            ..Position::default()
        };
        let (body, parsed) = object(&position);
        assert!(body.contains(r#""valid":false"#));
        assert_eq!(parsed["valid"], false);
    }
}
