//! Controller configuration.

use std::str::FromStr;

use tracing::warn;

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::models::{ObserveGamesParams, Pagination, RefreshGamesParams};

/// Page size for both observation and refresh.
pub const ENV_PAGE_SIZE: &str = "DISCOVERY_PAGE_SIZE";
/// `true`/`false` (or `1`/`0`): whether `load_data` also refreshes.
pub const ENV_REFRESH_ON_LOAD: &str = "DISCOVERY_REFRESH_ON_LOAD";
/// Latency of the demo upstream, in milliseconds.
pub const ENV_DEMO_LATENCY_MS: &str = "DISCOVERY_DEMO_LATENCY_MS";
/// Upper bound for each upstream fetch during a refresh, in milliseconds.
pub const ENV_FETCH_TIMEOUT_MS: &str = "DISCOVERY_FETCH_TIMEOUT_MS";

/// Configuration for the discovery controller.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use game_discovery::startup::DiscoveryConfig;
///
/// let config = DiscoveryConfig::default()
///     .with_page_size(10)
///     .with_refresh_on_load(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Parameters passed to every category observation
    pub observe_params: ObserveGamesParams,
    /// Parameters passed to the bulk refresh
    pub refresh_params: RefreshGamesParams,
    /// Whether `load_data` triggers a refresh after starting the load (default: true)
    pub refresh_on_load: bool,
    /// Artificial latency of the demo upstream (default: 300)
    pub demo_latency_ms: u64,
    /// Per-fetch refresh timeout (default: 10000)
    pub fetch_timeout_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            observe_params: ObserveGamesParams::default(),
            refresh_params: RefreshGamesParams::default(),
            refresh_on_load: true,
            demo_latency_ms: 300,
            fetch_timeout_ms: 10_000,
        }
    }
}

impl DiscoveryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same page size for observation and refresh.
    pub fn with_page_size(mut self, limit: u32) -> Self {
        self.observe_params.pagination = Pagination::new(0, limit);
        self.refresh_params.pagination = Pagination::new(0, limit);
        self
    }

    pub fn with_observe_params(mut self, params: ObserveGamesParams) -> Self {
        self.observe_params = params;
        self
    }

    pub fn with_refresh_params(mut self, params: RefreshGamesParams) -> Self {
        self.refresh_params = params;
        self
    }

    pub fn with_refresh_on_load(mut self, refresh: bool) -> Self {
        self.refresh_on_load = refresh;
        self
    }

    pub fn with_demo_latency_ms(mut self, latency_ms: u64) -> Self {
        self.demo_latency_ms = latency_ms;
        self
    }

    pub fn with_fetch_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.fetch_timeout_ms = timeout_ms;
        self
    }

    /// Read overrides from the environment, falling back to the default for
    /// any value that cannot be parsed.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        for result in [
            config.apply_page_size(),
            config.apply_refresh_on_load(),
            config.apply_demo_latency(),
            config.apply_fetch_timeout(),
        ] {
            if let Err(err) = result {
                warn!(error = %err, "Ignoring invalid configuration value");
            }
        }
        config
    }

    /// Read overrides from the environment, failing on the first invalid
    /// value.
    pub fn try_from_env() -> DiscoveryResult<Self> {
        let mut config = Self::default();
        config.apply_page_size()?;
        config.apply_refresh_on_load()?;
        config.apply_demo_latency()?;
        config.apply_fetch_timeout()?;
        Ok(config)
    }

    fn apply_page_size(&mut self) -> DiscoveryResult<()> {
        if let Some(limit) = read_env::<u32>(ENV_PAGE_SIZE)? {
            if limit == 0 {
                return Err(DiscoveryError::Config {
                    key: ENV_PAGE_SIZE.to_string(),
                    message: "page size must be positive".to_string(),
                });
            }
            self.observe_params.pagination = Pagination::new(0, limit);
            self.refresh_params.pagination = Pagination::new(0, limit);
        }
        Ok(())
    }

    fn apply_refresh_on_load(&mut self) -> DiscoveryResult<()> {
        if let Some(raw) = read_env::<String>(ENV_REFRESH_ON_LOAD)? {
            self.refresh_on_load = parse_bool(&raw).ok_or_else(|| DiscoveryError::Config {
                key: ENV_REFRESH_ON_LOAD.to_string(),
                message: format!("expected true or false, got '{raw}'"),
            })?;
        }
        Ok(())
    }

    fn apply_demo_latency(&mut self) -> DiscoveryResult<()> {
        if let Some(latency) = read_env::<u64>(ENV_DEMO_LATENCY_MS)? {
            self.demo_latency_ms = latency;
        }
        Ok(())
    }

    fn apply_fetch_timeout(&mut self) -> DiscoveryResult<()> {
        if let Some(timeout) = read_env::<u64>(ENV_FETCH_TIMEOUT_MS)? {
            if timeout == 0 {
                return Err(DiscoveryError::Config {
                    key: ENV_FETCH_TIMEOUT_MS.to_string(),
                    message: "timeout must be positive".to_string(),
                });
            }
            self.fetch_timeout_ms = timeout;
        }
        Ok(())
    }
}

/// Parse an environment variable. Unset or blank is `None`.
fn read_env<T>(key: &str) -> DiscoveryResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|err: T::Err| DiscoveryError::Config {
        key: key.to_string(),
        message: err.to_string(),
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
