//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CHAUFFEUR_*` environment variables and an
//! optional configuration file, in that order of precedence.
//!
//! On/off switches are read as text (`true`/`false`, `1`/`0`, `yes`/`no`,
//! `on`/`off`) rather than `bool`, because a `bool` field becomes a CLI flag
//! whose absence reads as `false` and masks the lower layers.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_POOL_MAX_SIZE;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Errors raised while validating loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A setting with no sensible default was not supplied.
    #[error("missing required setting {name}")]
    Missing { name: &'static str },
    /// An on/off switch holds something other than a recognised value.
    #[error("invalid value '{value}' for {name}: expected true or false")]
    InvalidSwitch { name: &'static str, value: String },
    /// The bind host is not an IP address.
    #[error("invalid bind host '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CHAUFFEUR")]
pub struct AppSettings {
    /// Interface to bind; defaults to all IPv4 interfaces.
    pub host: Option<String>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Required.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// File holding the session cookie signing key.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`; defaults to true.
    pub cookie_secure: Option<String>,
    /// Permit a generated session key when the key file is unreadable;
    /// defaults to false.
    pub allow_ephemeral_session_key: Option<String>,
}

fn parse_switch(
    name: &'static str,
    value: Option<&str>,
    default: bool,
) -> Result<bool, SettingsError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidSwitch {
            name,
            value: raw.to_owned(),
        }),
    }
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            Some(host) => host
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| SettingsError::InvalidHost {
                    value: host.to_owned(),
                    source,
                })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Database URL; startup fails without one.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::Missing {
                name: "CHAUFFEUR_DATABASE_URL",
            })
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SESSION_KEY_FILE))
    }

    pub fn cookie_secure(&self) -> Result<bool, SettingsError> {
        parse_switch("CHAUFFEUR_COOKIE_SECURE", self.cookie_secure.as_deref(), true)
    }

    pub fn allow_ephemeral_session_key(&self) -> Result<bool, SettingsError> {
        parse_switch(
            "CHAUFFEUR_ALLOW_EPHEMERAL_SESSION_KEY",
            self.allow_ephemeral_session_key.as_deref(),
            false,
        )
    }
}
