//! # Client Configuration
//!
//! Settings are read from environment variables (a `.env` file is honoured
//! through `dotenvy`) and validated before the client is built so that a
//! misconfigured CLI fails fast.
//!
//! | Variable                       | Default                          |
//! |--------------------------------|----------------------------------|
//! | `STOREFRONT_API_URL`           | `http://localhost:8000`          |
//! | `STOREFRONT_TIMEOUT_SECS`      | `10`                             |
//! | `STOREFRONT_SESSION_FILE`      | `$HOME/.storefront/session.json` |
//! | `STOREFRONT_PAYMENT_POLL_SECS` | `3`                              |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PAYMENT_POLL_SECS: u64 = 3;

/// Storefront client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the bakery API, without the `/api` suffix
    pub api_url: String,

    /// Per-request timeout in seconds
    ///
    /// Valid range: 1-120
    pub timeout_secs: u64,

    /// Where the bearer token is persisted between runs
    pub session_file: PathBuf,

    /// Interval between payment status checks
    pub payment_poll_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: default_session_file(),
            payment_poll_secs: DEFAULT_PAYMENT_POLL_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let api_url = env::var("STOREFRONT_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match env::var("STOREFRONT_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("STOREFRONT_TIMEOUT_SECS must be a valid number: {}", e))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let payment_poll_secs = match env::var("STOREFRONT_PAYMENT_POLL_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("STOREFRONT_PAYMENT_POLL_SECS must be a valid number: {}", e))?,
            Err(_) => DEFAULT_PAYMENT_POLL_SECS,
        };

        let session_file = env::var("STOREFRONT_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        Ok(Self {
            api_url,
            timeout_secs,
            session_file,
            payment_poll_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(format!(
                "STOREFRONT_API_URL must start with http:// or https:// (got '{}')",
                self.api_url
            ));
        }

        if self.timeout_secs < 1 || self.timeout_secs > 120 {
            return Err("STOREFRONT_TIMEOUT_SECS must be between 1 and 120".to_string());
        }

        if self.payment_poll_secs == 0 {
            return Err("STOREFRONT_PAYMENT_POLL_SECS must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn payment_poll_interval(&self) -> Duration {
        Duration::from_secs(self.payment_poll_secs)
    }
}

/// Load `.env`, read the environment and validate.
pub fn load() -> Result<ClientConfig, String> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

fn default_session_file() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".storefront").join("session.json"),
        None => PathBuf::from(".storefront").join("session.json"),
    }
}
