//! Binary entrypoint for the Jyotish HTTP server.
//!
//! Reads configuration from environment variables (see [`ServerConfig`]):
//! - `JYOTISH_HOST`: bind address (default: "0.0.0.0")
//! - `JYOTISH_PORT` or `PORT`: listen port (default: "3000")
//! - `JYOTISH_PROVIDER`: "ephemeris" or "stub" (default: "ephemeris")
//! - `JYOTISH_UTC_OFFSET`: offset of birth times (default: "+05:30")
//!
//! Log filtering follows `RUST_LOG` (default: "info").

use jyotish_server::config::ServerConfig;
use jyotish_server::router::build_router;
use jyotish_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(
        provider = %config.provider,
        utc_offset = %config.utc_offset,
        "jyotish server starting on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
