//! HTTP/JSON API server for birth-chart calculation.
//!
//! Exposes `POST /calculate` and a liveness route. This crate contains the
//! router, handlers, API schema types, error mapping and configuration; the
//! chart computation itself lives in `jyotish-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
