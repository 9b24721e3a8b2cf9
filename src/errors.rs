// Error taxonomy for the analysis pipeline and log store

use thiserror::Error;

/// Failures surfaced by the core pipeline and the log directory reader.
///
/// The HTTP layer owns the status-code mapping; nothing here knows about
/// axum or JSON bodies.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller submitted no usable log content.
    #[error("no logs or code provided for analysis")]
    EmptyInput,

    /// The server is missing required configuration (e.g. the API key).
    #[error("server misconfigured: {0}")]
    Configuration(String),

    /// The outbound inference call failed: transport error or non-2xx
    /// response. Carries whatever diagnostic the remote returned.
    #[error("inference request failed: {0}")]
    Inference(String),

    /// Log listing/lookup found nothing.
    #[error("{0}")]
    NotFound(String),

    /// Filesystem fault other than not-found while reading logs.
    #[error("log directory I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
