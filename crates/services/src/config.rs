use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_RETRY_COOLDOWN: Duration = Duration::from_millis(2000);

const IMAGE_ASSET_PATH: &str = "static/images/";

/// Where the quiz backend lives and how often the client re-synchronizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    poll_interval: Duration,
    retry_cooldown: Duration,
}

impl ClientConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparsable base url or a zero duration.
    pub fn new(
        base_url: &str,
        poll_interval: Duration,
        retry_cooldown: Duration,
    ) -> Result<Self, ConfigError> {
        if poll_interval.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: "poll interval",
            });
        }
        if retry_cooldown.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: "retry cooldown",
            });
        }
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            poll_interval,
            retry_cooldown,
        })
    }

    /// Read `QUIZ_BASE_URL`, `QUIZ_POLL_INTERVAL_SECS` and
    /// `QUIZ_RETRY_COOLDOWN_MS`, falling back to defaults for unset vars.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("QUIZ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let poll_interval = env_u64("QUIZ_POLL_INTERVAL_SECS")?
            .map_or(DEFAULT_POLL_INTERVAL, Duration::from_secs);
        let retry_cooldown = env_u64("QUIZ_RETRY_COOLDOWN_MS")?
            .map_or(DEFAULT_RETRY_COOLDOWN, Duration::from_millis);
        Self::new(&base_url, poll_interval, retry_cooldown)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Directory url images are resolved against.
    #[must_use]
    pub fn asset_root(&self) -> Url {
        self.base_url
            .join(IMAGE_ASSET_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    #[must_use]
    pub fn retry_cooldown(&self) -> Duration {
        self.retry_cooldown
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url should be valid"),
            poll_interval: DEFAULT_POLL_INTERVAL,
            retry_cooldown: DEFAULT_RETRY_COOLDOWN,
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|source| ConfigError::BaseUrl {
        raw: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::OpaqueBaseUrl(raw.to_string()));
    }
    Ok(url)
}

fn env_u64(var: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, raw }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_schedule() {
        let config = ClientConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.retry_cooldown(), Duration::from_millis(2000));
        assert_eq!(config.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = ClientConfig::new(
            "http://quiz.local/event",
            DEFAULT_POLL_INTERVAL,
            DEFAULT_RETRY_COOLDOWN,
        )
        .unwrap();
        assert_eq!(config.base_url().as_str(), "http://quiz.local/event/");
        assert_eq!(
            config.asset_root().as_str(),
            "http://quiz.local/event/static/images/"
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            ClientConfig::new("not a url", DEFAULT_POLL_INTERVAL, DEFAULT_RETRY_COOLDOWN),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new(DEFAULT_BASE_URL, Duration::ZERO, DEFAULT_RETRY_COOLDOWN),
            Err(ConfigError::ZeroDuration { .. })
        ));
        assert!(matches!(
            ClientConfig::new(
                "mailto:quiz@example.com",
                DEFAULT_POLL_INTERVAL,
                DEFAULT_RETRY_COOLDOWN
            ),
            Err(ConfigError::OpaqueBaseUrl(_))
        ));
    }
}
