use crate::TraccarError;
use crate::encode::fields::{Field, SpeedRounding, position_fields};
use crate::encode::{json, query};
use crate::position::Position;
use bon::bon;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// A client for one Traccar-compatible OsmAnd endpoint.
///
/// Holds the connection-independent settings (host, device id, base path,
/// speed rounding) plus the HTTP client used by the `send_*` methods. It is
/// cheap to keep around and safe to share across tasks; encoding itself does
/// no I/O and touches no shared state.
///
/// Use the builder pattern to construct an instance:
/// ```rust
/// # use traccar_client::{TraccarClient, TraccarError};
/// # fn main() -> Result<(), TraccarError> {
/// let client = TraccarClient::builder()
///     .host("http://demo.traccar.org".to_string())
///     .port(5055)
///     .device_id("356789012345678".to_string())
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct TraccarClient {
    host: String,
    port: Option<u16>,
    device_id: String,
    base_path: String,
    speed_rounding: SpeedRounding,
    http: reqwest::Client,
}

#[bon]
impl TraccarClient {
    /// Constructs a `TraccarClient` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `host: String` - Server host including the scheme, e.g. `http://example.org`.
    /// * `port: Option<u16>` - Optional server port (Traccar's OsmAnd listener defaults to 5055 server-side; omit it to use whatever the host URL implies).
    /// * `device_id: String` - The identifier the server attributes reports to. Required and non-empty.
    /// * `base_path: String` - (Default: `"/"`) Path prefix on the server, joined so the base URL ends in exactly one `/`.
    /// * `timeout: Duration` - (Default: 4 seconds) Per-request timeout applied by the HTTP client.
    /// * `speed_rounding: SpeedRounding` - (Default: `Nearest`) How the km/h → knots conversion is rounded.
    ///
    /// # Errors
    ///
    /// * [`TraccarError::MissingHost`] if `host` is empty or whitespace.
    /// * [`TraccarError::MissingDeviceId`] if `device_id` is empty or whitespace.
    /// * [`TraccarError::Http`] if the underlying HTTP client fails to initialize.
    #[builder]
    pub fn new(
        host: String,
        port: Option<u16>,
        device_id: String,
        #[builder(default = "/".to_string())] base_path: String,
        #[builder(default = Duration::from_secs(4))] timeout: Duration,
        #[builder(default)] speed_rounding: SpeedRounding,
    ) -> Result<Self, TraccarError> {
        if host.trim().is_empty() {
            return Err(TraccarError::MissingHost);
        }
        if device_id.trim().is_empty() {
            return Err(TraccarError::MissingDeviceId);
        }
        let base_path = if base_path.is_empty() {
            "/".to_string()
        } else {
            base_path
        };
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            host,
            port,
            device_id,
            base_path,
            speed_rounding,
            http,
        })
    }

    /// The base URL reports are sent to: `host[:port]<base_path>/`.
    pub fn base_url(&self) -> String {
        query::base_url(&self.host, self.port, &self.base_path)
    }

    /// Encodes a report as a full GET URL, e.g.
    /// `http://h:5055/?id=dev&lat=45.1234567&...`.
    pub fn query_url(&self, position: &Position) -> String {
        query::render_url(&self.base_url(), &self.fields(position, now_epoch_ms()))
    }

    /// Encodes a report as an `application/x-www-form-urlencoded` POST body.
    pub fn form_body(&self, position: &Position) -> String {
        query::render_pairs(&self.fields(position, now_epoch_ms()))
    }

    /// Encodes a report as an `application/json` POST body.
    pub fn json_body(&self, position: &Position) -> String {
        json::render_object(&self.fields(position, now_epoch_ms()))
    }

    /// Sends a report as a GET request with the query-string encoding.
    ///
    /// Returns the HTTP status code on success. Status 200 is the sole
    /// success criterion; anything else is [`TraccarError::Rejected`]. No
    /// retries are attempted.
    ///
    /// # Errors
    ///
    /// * [`TraccarError::Http`] on connection failure or timeout.
    /// * [`TraccarError::Rejected`] on a non-200 response.
    pub async fn send_query(&self, position: &Position) -> Result<u16, TraccarError> {
        let url = self.query_url(position);
        debug!(%url, "sending position report via GET");
        let response = self.http.get(&url).send().await?;
        check_status(response.status().as_u16())
    }

    /// Sends a report as a form-encoded POST to the base URL.
    ///
    /// # Errors
    ///
    /// Same as [`send_query`](TraccarClient::send_query).
    pub async fn send_form(&self, position: &Position) -> Result<u16, TraccarError> {
        let url = self.base_url();
        let body = self.form_body(position);
        debug!(%url, %body, "sending position report via form POST");
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        check_status(response.status().as_u16())
    }

    /// Sends a report as a JSON POST to the base URL.
    ///
    /// # Errors
    ///
    /// Same as [`send_query`](TraccarClient::send_query).
    pub async fn send_json(&self, position: &Position) -> Result<u16, TraccarError> {
        let url = self.base_url();
        let body = self.json_body(position);
        debug!(%url, %body, "sending position report via JSON POST");
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        check_status(response.status().as_u16())
    }

    fn fields(&self, position: &Position, now_ms: Option<u64>) -> Vec<Field> {
        position_fields(&self.device_id, position, self.speed_rounding, now_ms)
    }

    #[cfg(test)]
    fn encoded_at(&self, position: &Position, now_ms: Option<u64>) -> (String, String, String) {
        let fields = self.fields(position, now_ms);
        (
            query::render_url(&self.base_url(), &fields),
            query::render_pairs(&fields),
            json::render_object(&fields),
        )
    }
}

fn check_status(status: u16) -> Result<u16, TraccarError> {
    if status == 200 {
        Ok(status)
    } else {
        Err(TraccarError::Rejected { status })
    }
}

/// Current wall-clock time as epoch milliseconds, the fallback for reports
/// without an explicit fix time.
fn now_epoch_ms() -> Option<u64> {
    u64::try_from(Utc::now().timestamp_millis()).ok()
}
