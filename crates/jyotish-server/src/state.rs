//! Application state shared by the handlers.
//!
//! [`AppState`] only holds the chart provider behind an `Arc`; providers are
//! `Send + Sync` and stateless, so handlers share it without locking.

use std::sync::Arc;

use jyotish_core::{ChartProvider, EphemerisProvider, StubProvider};

use crate::config::{ProviderKind, ServerConfig};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Provider that computes charts for `/calculate`.
    pub provider: Arc<dyn ChartProvider>,
}

impl AppState {
    /// Builds the state for the provider selected in `config`.
    pub fn new(config: &ServerConfig) -> Self {
        match config.provider {
            ProviderKind::Ephemeris => Self::with_provider(EphemerisProvider::new(config.utc_offset)),
            ProviderKind::Stub => Self::stub(),
        }
    }

    /// State backed by an arbitrary provider.
    pub fn with_provider(provider: impl ChartProvider + 'static) -> Self {
        AppState {
            provider: Arc::new(provider),
        }
    }

    /// State backed by the fixed-output stub (for contract testing).
    pub fn stub() -> Self {
        Self::with_provider(StubProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_follows_config() {
        let mut config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(AppState::new(&config).provider.name(), "ephemeris");
        config.provider = ProviderKind::Stub;
        assert_eq!(AppState::new(&config).provider.name(), "stub");
    }
}
