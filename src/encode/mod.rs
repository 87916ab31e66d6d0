//! Wire encodings for the OsmAnd protocol family.
//!
//! One ordered field table ([`fields`]) feeds three renderers: the GET query
//! URL and form POST body ([`query`]) and the JSON POST body ([`json`]).

pub(crate) mod fields;
pub(crate) mod json;
pub(crate) mod query;

pub use fields::SpeedRounding;
