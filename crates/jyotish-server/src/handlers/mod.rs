//! HTTP handler modules for the Jyotish API.
//!
//! Handlers parse the request, hand validated input to the configured
//! [`ChartProvider`](jyotish_core::ChartProvider), and return JSON. No chart
//! logic lives here.

pub mod calculate;
pub mod health;
