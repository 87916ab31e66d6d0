use serde::{Deserialize, Serialize};

/// A single observed GPS/telemetry sample.
///
/// Every field is optional; a `None` field is left out of the encoded payload
/// entirely. The only exception is the timestamp: when it is unset the client
/// substitutes the current wall-clock time, so a `timestamp` key is normally
/// always present.
///
/// Construct one with struct-update syntax:
/// ```rust
/// use traccar_client::Position;
///
/// let position = Position {
///     latitude: Some(52.379_189_7),
///     longitude: Some(4.899_431_2),
///     speed_kmh: Some(14.0),
///     ..Position::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Altitude in meters.
    pub altitude: Option<f64>,
    /// Ground speed in km/h. Converted to whole knots on the wire.
    pub speed_kmh: Option<f64>,
    /// Course over ground in degrees, 0–360.
    pub heading: Option<f64>,
    /// Horizontal dilution of precision.
    pub hdop: Option<f64>,
    /// Horizontal accuracy estimate in meters.
    pub accuracy: Option<f64>,
    /// Total distance travelled in meters.
    pub odometer: Option<f64>,
    /// Fix time as epoch milliseconds. `None` or `Some(0)` means "unset":
    /// the current time is substituted when a clock is available.
    pub timestamp_ms: Option<u64>,
    /// Battery level, 0–100.
    pub battery: Option<u8>,
    /// Whether the device is charging. Only reported alongside [`battery`],
    /// never on its own.
    ///
    /// [`battery`]: Position::battery
    pub charging: bool,
    /// Whether the receiver considers the fix valid.
    pub valid: Option<bool>,
    /// Driver identification token (iButton, RFID badge, ...).
    pub driver_unique_id: Option<String>,
    /// Serving cell description, e.g. `mcc,mnc,lac,cid`.
    pub cell: Option<String>,
    /// Nearby Wi-Fi access points, e.g. `mac1,rssi1;mac2,rssi2`.
    pub wifi: Option<String>,
    /// Event name to attach to this report, e.g. `alarm`.
    pub event: Option<String>,
    /// Activity classification, e.g. `still` or `in_vehicle`.
    pub activity: Option<String>,
}
