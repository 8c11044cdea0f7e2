//! Gallery configuration parsed from environment variables.
//!
//! Store connection parameters degrade to empty strings when unset: the
//! process still starts and the first store call fails instead.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IMAGES_TABLE: &str = "images";
pub const DEFAULT_STORE_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Connection parameters for the hosted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub service_key: String,
    pub table: String,
    pub connect_timeout: Duration,
    /// `None` means requests may wait indefinitely.
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub port: u16,
    pub store: StoreConfig,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
}

impl GalleryConfig {
    /// Build config from the process environment.
    ///
    /// - `SUPABASE_URL`: store URL, default empty
    /// - `SUPABASE_SERVICE_KEY`: store credential, default empty
    /// - `GALLERY_TABLE`: default `images`
    /// - `PORT`: default 3000
    /// - `STORE_CONNECT_TIMEOUT_SECS`: default 10
    /// - `STORE_REQUEST_TIMEOUT_SECS`: unset means no timeout
    /// - `SESSION_TTL_SECS`: default 3600
    /// - `SESSION_SWEEP_INTERVAL_SECS`: default 60, at least 1
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let store = StoreConfig {
            url: lookup("SUPABASE_URL").unwrap_or_default().trim_end_matches('/').to_string(),
            service_key: lookup("SUPABASE_SERVICE_KEY").unwrap_or_default(),
            table: lookup("GALLERY_TABLE")
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGES_TABLE.to_string()),
            connect_timeout: Duration::from_secs(parse_u64(
                &lookup,
                "STORE_CONNECT_TIMEOUT_SECS",
                DEFAULT_STORE_CONNECT_TIMEOUT_SECS,
            )),
            request_timeout: lookup("STORE_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs),
        };

        let session_ttl = Duration::from_secs(parse_u64(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS));
        let sweep_interval = Duration::from_secs(
            parse_u64(&lookup, "SESSION_SWEEP_INTERVAL_SECS", DEFAULT_SESSION_SWEEP_INTERVAL_SECS).max(1),
        );

        Ok(Self { port, store, session_ttl, sweep_interval })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
