#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, OnceLock},
};

use tracing::Level;

/// Address the web server binds to when `FKGRADE_HOST` is unset.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Port the web server binds to when `FKGRADE_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration shared across the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Interface the web server listens on.
    host:      IpAddr,
    /// Port the web server listens on.
    port:      u16,
    /// Most verbose level that gets logged.
    log_level: Level,
    /// Values that were set but could not be parsed, one message each.
    warnings:  Vec<String>,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            host:      DEFAULT_HOST,
            port:      DEFAULT_PORT,
            log_level: Level::INFO,
            warnings:  Vec::new(),
        }
    }
}

impl ConfigState {
    /// Construct a new configuration instance from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construct a configuration from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults and are recorded in
    /// [`Self::warnings`]; an empty value counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let host = parse_or(read("FKGRADE_HOST"), "FKGRADE_HOST", defaults.host, &mut warnings);
        let port = parse_or(read("FKGRADE_PORT"), "FKGRADE_PORT", defaults.port, &mut warnings);
        let log_level =
            parse_or(read("FKGRADE_LOG"), "FKGRADE_LOG", defaults.log_level, &mut warnings);

        Self {
            host,
            port,
            log_level,
            warnings,
        }
    }

    /// Returns a copy with the host and port replaced where overrides are
    /// given.
    pub fn with_overrides(mut self, host: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Address the web server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Most verbose level that gets logged.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Messages for variables that were set to unparseable values.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Parses `value`, falling back to `default` when it is missing or invalid.
/// Invalid values are described in `warnings`.
fn parse_or<T>(value: Option<String>, key: &str, default: T, warnings: &mut Vec<String>) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match value {
        None => default,
        Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            warnings.push(format!("Ignoring invalid {key}={raw:?}, using {default}"));
            default
        }),
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Debug, Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG: OnceLock<Arc<ConfigState>> = OnceLock::new();

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> ConfigHandle {
    ConfigHandle(Arc::clone(
        CONFIG.get_or_init(|| Arc::new(ConfigState::from_env())),
    ))
}
