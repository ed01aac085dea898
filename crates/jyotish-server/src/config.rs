//! Server configuration read from environment variables.

use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;
use jyotish_core::provider::parse_utc_offset;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UTC_OFFSET: &str = "+05:30";

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port '{value}'")]
    InvalidPort { value: String },

    #[error("unknown chart provider '{value}': use ephemeris or stub")]
    UnknownProvider { value: String },

    #[error("invalid UTC offset '{value}': use +HH:MM or -HH:MM")]
    InvalidUtcOffset { value: String },
}

/// Which [`ChartProvider`](jyotish_core::ChartProvider) backs `/calculate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Ephemeris,
    Stub,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ephemeris" => Ok(ProviderKind::Ephemeris),
            "stub" => Ok(ProviderKind::Stub),
            _ => Err(ConfigError::UnknownProvider {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Ephemeris => f.write_str("ephemeris"),
            ProviderKind::Stub => f.write_str("stub"),
        }
    }
}

/// Startup configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub provider: ProviderKind,
    /// Offset applied to birth times by the ephemeris provider.
    pub utc_offset: FixedOffset,
}

impl ServerConfig {
    /// Reads `JYOTISH_HOST`, `JYOTISH_PORT` (or `PORT`), `JYOTISH_PROVIDER`
    /// and `JYOTISH_UTC_OFFSET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("JYOTISH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("JYOTISH_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let provider = match lookup("JYOTISH_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => ProviderKind::default(),
        };

        let raw_offset =
            lookup("JYOTISH_UTC_OFFSET").unwrap_or_else(|| DEFAULT_UTC_OFFSET.to_string());
        let utc_offset = parse_utc_offset(&raw_offset)
            .ok_or(ConfigError::InvalidUtcOffset { value: raw_offset })?;

        Ok(ServerConfig {
            host,
            port,
            provider,
            utc_offset,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.provider, ProviderKind::Ephemeris);
        assert_eq!(config.utc_offset.local_minus_utc(), 19_800);
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JYOTISH_HOST", "127.0.0.1"),
            ("JYOTISH_PORT", "8080"),
            ("JYOTISH_PROVIDER", "Stub"),
            ("JYOTISH_UTC_OFFSET", "-04:00"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.provider, ProviderKind::Stub);
        assert_eq!(config.utc_offset.local_minus_utc(), -14_400);
    }

    #[test]
    fn falls_back_to_platform_port() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "10000")])).unwrap();
        assert_eq!(config.port, 10000);
        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", "10000"), ("JYOTISH_PORT", "9000")]))
                .unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[("JYOTISH_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        let err = ServerConfig::from_lookup(lookup(&[("JYOTISH_PROVIDER", "swiss")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider { .. }));
        let err =
            ServerConfig::from_lookup(lookup(&[("JYOTISH_UTC_OFFSET", "IST")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid UTC offset 'IST': use +HH:MM or -HH:MM");
    }
}
