use serde::Deserialize;

use std::time::Duration;

use crate::constants::*;
use crate::error::{ConfigError, Result};

/// Setup options for a [`Player`](super::Player)
///
/// Only `host` is required. Everything else falls back to the values the
/// TVs ship with, so a configuration file can be as small as
/// `{ "host": "192.168.0.23" }`.
///
/// The order of `sources` matters: it is the order shown to the user and
/// the order of the slots in the TV's source menu.
///
/// # Example
///
/// ```
/// use vestel::Config;
///
/// let mut config = Config::new("192.168.0.23");
/// config.name = "Bedroom TV".to_string();
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Host name or IP address of the TV
    pub host: String,
    /// Display name for the player
    #[serde(default = "default_name")]
    pub name: String,
    /// Port of the TCP remote control channel
    #[serde(default = "default_tcp_port")]
    pub tcp_port: u16,
    /// Port of the websocket status channel
    #[serde(default = "default_ws_port")]
    pub ws_port: u16,
    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Selectable sources in source menu order
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    /// Whether to offer power on/off control
    #[serde(default = "default_supports_power")]
    pub supports_power: bool,
}

impl Config {
    /// Config for `host` with every other option at its default
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            name: default_name(),
            tcp_port: default_tcp_port(),
            ws_port: default_ws_port(),
            timeout: default_timeout(),
            sources: default_sources(),
            supports_power: default_supports_power(),
        }
    }

    /// Timeout as a [`Duration`] for connection builders
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Check the options once at setup
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost.into());
        }
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources.into());
        }
        if self.timeout == 0 {
            return Err(ConfigError::ZeroTimeout.into());
        }
        Ok(())
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_tcp_port() -> u16 {
    DEFAULT_TCP_PORT
}

fn default_ws_port() -> u16 {
    DEFAULT_WS_PORT
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

fn default_sources() -> Vec<String> {
    DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
}

fn default_supports_power() -> bool {
    true
}
