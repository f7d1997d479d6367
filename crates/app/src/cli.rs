//! Command-line flags. Each one overrides its environment variable, which in
//! turn overrides the built-in default.

use std::time::Duration;

use clap::Parser;
use services::{ClientConfig, ConfigError};
use tracing_subscriber::EnvFilter;

/// Desktop client for the live quiz backend
#[derive(Parser, Debug)]
#[command(name = "quiz")]
#[command(about = "Desktop client for the live quiz backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base url (overrides $QUIZ_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seconds between status polls (overrides $QUIZ_POLL_INTERVAL_SECS)
    #[arg(long)]
    pub poll_interval_secs: Option<u64>,

    /// Milliseconds the options stay disabled after a wrong answer
    /// (overrides $QUIZ_RETRY_COOLDOWN_MS)
    #[arg(long)]
    pub retry_cooldown_ms: Option<u64>,

    /// Log filter such as `debug` or `services=trace` (overrides $RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// # Errors
    ///
    /// Returns `ConfigError` for an invalid flag or environment value.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let from_env = ClientConfig::from_env()?;
        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| from_env.base_url().to_string());
        let poll_interval = self
            .poll_interval_secs
            .map_or(from_env.poll_interval(), Duration::from_secs);
        let retry_cooldown = self
            .retry_cooldown_ms
            .map_or(from_env.retry_cooldown(), Duration::from_millis);
        ClientConfig::new(&base_url, poll_interval, retry_cooldown)
    }

    /// `--log-level` first, then `RUST_LOG`, then `info`.
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        self.log_level
            .as_deref()
            .and_then(|level| EnvFilter::try_new(level).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }
}
