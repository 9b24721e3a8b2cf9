// Configuration structs

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Process-wide configuration, constructed once at startup and passed by
/// reference into the Gemini client and the log store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. `None` means the server starts but every `/analyze`
    /// call fails with a configuration error until the key is provided.
    pub api_key: Option<String>,

    /// Bind address for the HTTP server (e.g. "0.0.0.0:5000")
    pub bind_address: String,

    /// Directory holding the `.txt` log files
    pub log_dir: PathBuf,

    /// Base URL of the Gemini generateContent endpoint. Only overridden in
    /// tests; production always talks to the real endpoint.
    pub gemini_base_url: String,
}
