//! Chart calculation response type.
//!
//! The request body is validated from raw JSON by
//! [`BirthInput::from_json`](jyotish_core::BirthInput::from_json) rather than
//! a serde derive, so field-level failures can be reported together.

use jyotish_core::ChartResult;
use serde::Serialize;

use super::common::Status;

/// Success body of `POST /calculate`: the status marker followed by the
/// chart fields at top level.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub status: Status,
    #[serde(flatten)]
    pub chart: ChartResult,
}

impl CalculateResponse {
    pub fn success(chart: ChartResult) -> Self {
        CalculateResponse {
            status: Status::Success,
            chart,
        }
    }
}
