// Configuration loader
// Reads GEMINI_API_KEY, PORT and TRACETOFIX_LOG_DIR from the environment

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::settings::{Config, DEFAULT_LOG_DIR, DEFAULT_PORT};
use crate::gemini::GEMINI_BASE_URL;

/// Build the process configuration from environment variables.
///
/// A missing API key is not fatal here: the server can start and serve the
/// log endpoints, and `/analyze` reports the misconfiguration at call time.
pub fn load_config() -> Result<Config> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());

    if api_key.is_none() {
        tracing::error!(
            "GEMINI_API_KEY is missing - set it in .env or the environment; \
             /analyze will fail until it is provided"
        );
    }

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT value: '{raw}'"))?,
        Err(_) => DEFAULT_PORT,
    };

    let log_dir = std::env::var("TRACETOFIX_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));

    Ok(Config {
        api_key,
        bind_address: format!("0.0.0.0:{port}"),
        log_dir,
        gemini_base_url: GEMINI_BASE_URL.to_string(),
    })
}

#[cfg(test)]
mod tests {
    // Environment-dependent loading is covered by integration tests; unit
    // tests here would race on the shared process environment.
}
