//! Liveness handler.

/// Plaintext body of `GET /`.
pub const LIVENESS_MESSAGE: &str = "Vedic Insights Jyotish API is running.";

/// Reports that the service is up.
///
/// `GET /`
pub async fn home() -> &'static str {
    tracing::info!("home endpoint hit, service is online");
    LIVENESS_MESSAGE
}
