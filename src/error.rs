use thiserror::Error;

/// The primary error type for the traccar-client crate.
///
/// Configuration problems are caught at client construction, before any
/// network attempt. Transport problems are returned by the `send_*` methods;
/// none of them is retried automatically.
#[derive(Error, Debug)]
pub enum TraccarError {
    // --- Configuration errors ---
    #[error("device id is empty; a report cannot be attributed without one")]
    MissingDeviceId,

    #[error("server host is not set")]
    MissingHost,

    // --- Transport errors ---
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("server rejected the report with HTTP status {status}")]
    Rejected {
        /// Raw status code returned by the server.
        status: u16,
    },
}
