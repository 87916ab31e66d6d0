//! Percent-encoded renderers: the GET query URL and the form POST body.
//!
//! Both targets render the same `key=value` pairs joined by `&`; the query
//! URL additionally prefixes the base URL and a `?`. Free-text values are
//! percent-encoded per RFC 3986: unreserved characters pass through, space
//! becomes `%20` (never `+`), everything else becomes uppercase `%XX` over
//! the UTF-8 bytes.

use crate::encode::fields::{Field, FieldValue};
use std::fmt::Write;

/// Joins host, optional port and base path into `host[:port]<path>/`,
/// guaranteeing exactly one trailing slash.
pub(crate) fn base_url(host: &str, port: Option<u16>, base_path: &str) -> String {
    let mut url = String::with_capacity(host.len() + base_path.len() + 8);
    url.push_str(host);
    if let Some(port) = port {
        let _ = write!(url, ":{port}");
    }
    if !base_path.is_empty() {
        if !base_path.starts_with('/') {
            url.push('/');
        }
        url.push_str(base_path);
    }
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Renders `key=value&key=value...` with percent-encoded text values.
pub(crate) fn render_pairs(fields: &[Field]) -> String {
    let mut out = String::with_capacity(128);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(field.key);
        out.push('=');
        match &field.value {
            FieldValue::Text(s) => out.push_str(&urlencoding::encode(s)),
            FieldValue::Decimal(d) => out.push_str(d),
            FieldValue::Int(n) => {
                let _ = write!(out, "{n}");
            }
            FieldValue::Bool(b) | FieldValue::Charge(b) => {
                out.push_str(if *b { "true" } else { "false" });
            }
            FieldValue::Timestamp(ts) => {
                let _ = write!(out, "{ts}");
            }
        }
    }
    out
}

/// Renders the full GET URL: base URL, `?`, then the pairs.
pub(crate) fn render_url(base: &str, fields: &[Field]) -> String {
    let pairs = render_pairs(fields);
    let mut url = String::with_capacity(base.len() + 1 + pairs.len());
    url.push_str(base);
    url.push('?');
    url.push_str(&pairs);
    url
}
