//! # Traccar Client
//!
//! Report GPS positions to Traccar-compatible servers over the OsmAnd
//! protocol.
//!
//! The OsmAnd protocol is a simple HTTP convention accepted by Traccar and
//! compatible tracking servers. This crate encodes a position report into the
//! three wire shapes those servers accept and, optionally, sends it:
//!
//! - a **GET query string** (`?id=dev&lat=...&lon=...`),
//! - a **form POST body** (`application/x-www-form-urlencoded`),
//! - a **JSON POST body** (`application/json`).
//!
//! All three are driven by one field model: a field left unset on
//! [`Position`] never appears in any output, numeric fields use the fixed
//! precisions the receivers expect (7 decimals for coordinates, 2 for HDOP,
//! 1 for the rest), and speed is converted from km/h to whole knots.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use traccar_client::{Position, TraccarClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), traccar_client::TraccarError> {
//!     let client = TraccarClient::builder()
//!         .host("http://demo.traccar.org".to_string())
//!         .port(5055)
//!         .device_id("356789012345678".to_string())
//!         .build()?;
//!
//!     let position = Position {
//!         latitude: Some(52.379_189_7),
//!         longitude: Some(4.899_431_2),
//!         speed_kmh: Some(14.0),
//!         battery: Some(80),
//!         ..Position::default()
//!     };
//!
//!     // Encode without sending...
//!     println!("{}", client.query_url(&position));
//!
//!     // ...or hand it to the server directly.
//!     client.send_query(&position).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod encode;
pub mod error;
pub mod position;

pub use client::TraccarClient;
pub use encode::SpeedRounding;
pub use error::TraccarError;
pub use position::Position;
