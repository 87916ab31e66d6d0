//! The shared field model behind all three wire encodings.
//!
//! Every encoding (query URL, form body, JSON body) renders the same ordered
//! list of fields produced here. Field selection and numeric formatting live
//! in this module only; the renderers in [`query`](crate::encode::query) and
//! [`json`](crate::encode::json) differ solely in delimiters and escaping.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// 1 knot = 1.852 km/h, exactly.
const KMH_PER_KNOT: f64 = 1.852;

/// How the km/h → knots conversion is rounded to a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SpeedRounding {
    /// Round to the nearest knot.
    #[default]
    Nearest,
    /// Round down. Some receivers are calibrated against trackers that
    /// truncate, so both modes are supported.
    Floor,
}

/// One wire value, formatted but not yet escaped for a particular target.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    /// Free text; percent-encoded in query/form output, JSON-escaped in
    /// JSON output.
    Text(String),
    /// A fixed-precision decimal, kept as text so trailing zeros survive
    /// (`hdop=1.30` must not collapse to `1.3`).
    Decimal(String),
    /// A bare integer.
    Int(i64),
    /// A boolean rendered as literal `true`/`false` in every target.
    Bool(bool),
    /// The charging flag. Query and form output always render it next to
    /// `batt`; JSON output only renders it when `true`. The asymmetry is
    /// long-standing receiver-visible behavior and is kept as is.
    Charge(bool),
    /// Fix time as epoch milliseconds. Rendered as a raw integer in
    /// query/form output and as an ISO-8601 UTC string in JSON output.
    Timestamp(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Field {
    pub key: &'static str,
    pub value: FieldValue,
}

impl Field {
    fn new(key: &'static str, value: FieldValue) -> Self {
        Self { key, value }
    }
}

/// Builds the ordered field list for one report.
///
/// `now_ms` is the wall-clock fallback used when the report carries no
/// timestamp; pass `None` to encode without a time source, in which case the
/// `timestamp` field is omitted entirely. Absent fields are never pushed, so
/// the renderers cannot leak them into the output.
pub(crate) fn position_fields(
    device_id: &str,
    position: &Position,
    rounding: SpeedRounding,
    now_ms: Option<u64>,
) -> Vec<Field> {
    let mut fields = Vec::with_capacity(18);
    fields.push(Field::new("id", FieldValue::Text(device_id.to_string())));

    if let Some(lat) = finite(position.latitude) {
        fields.push(Field::new("lat", decimal(lat, 7)));
    }
    if let Some(lon) = finite(position.longitude) {
        fields.push(Field::new("lon", decimal(lon, 7)));
    }
    if let Some(altitude) = finite(position.altitude) {
        fields.push(Field::new("altitude", decimal(altitude, 1)));
    }
    if let Some(hdop) = finite(position.hdop) {
        fields.push(Field::new("hdop", decimal(hdop, 2)));
    }
    if let Some(kmh) = finite(position.speed_kmh) {
        fields.push(Field::new("speed", FieldValue::Int(knots(kmh, rounding))));
    }
    if let Some(valid) = position.valid {
        fields.push(Field::new("valid", FieldValue::Bool(valid)));
    }
    if let Some(ts) = resolve_timestamp(position.timestamp_ms, now_ms) {
        fields.push(Field::new("timestamp", FieldValue::Timestamp(ts)));
    }
    if let Some(accuracy) = finite(position.accuracy) {
        fields.push(Field::new("accuracy", decimal(accuracy, 1)));
    }
    if let Some(heading) = finite(position.heading) {
        fields.push(Field::new("heading", decimal(heading, 1)));
    }
    if let Some(battery) = position.battery {
        fields.push(Field::new("batt", FieldValue::Int(i64::from(battery))));
        fields.push(Field::new("charge", FieldValue::Charge(position.charging)));
    }
    if let Some(driver) = text(position.driver_unique_id.as_deref()) {
        fields.push(Field::new("driverUniqueId", driver));
    }
    if let Some(cell) = text(position.cell.as_deref()) {
        fields.push(Field::new("cell", cell));
    }
    if let Some(wifi) = text(position.wifi.as_deref()) {
        fields.push(Field::new("wifi", wifi));
    }
    if let Some(event) = text(position.event.as_deref()) {
        fields.push(Field::new("event", event));
    }
    if let Some(activity) = text(position.activity.as_deref()) {
        fields.push(Field::new("activity", activity));
    }
    if let Some(odometer) = finite(position.odometer) {
        fields.push(Field::new("odometer", decimal(odometer, 1)));
    }
    fields
}

/// NaN/infinity were the "absent" sentinel in older tracker firmware;
/// treat them the same as `None` so they can never reach the wire.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Empty strings mean "absent".
fn text(value: Option<&str>) -> Option<FieldValue> {
    value
        .filter(|s| !s.is_empty())
        .map(|s| FieldValue::Text(s.to_string()))
}

fn decimal(value: f64, precision: usize) -> FieldValue {
    FieldValue::Decimal(format!("{value:.precision$}"))
}

/// An explicit zero timestamp counts as unset, matching receivers that use
/// zero as their own "no fix time" marker.
fn resolve_timestamp(timestamp_ms: Option<u64>, now_ms: Option<u64>) -> Option<u64> {
    timestamp_ms.filter(|&ts| ts != 0).or(now_ms)
}

fn knots(speed_kmh: f64, rounding: SpeedRounding) -> i64 {
    let knots = speed_kmh / KMH_PER_KNOT;
    let rounded = match rounding {
        SpeedRounding::Nearest => knots.round(),
        SpeedRounding::Floor => knots.floor(),
    };
    rounded as i64
}
