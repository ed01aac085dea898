//! Chart calculation handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use jyotish_core::{BirthInput, ValidationErrors};

use crate::error::ApiError;
use crate::schema::calculate::CalculateResponse;
use crate::state::AppState;

/// Validates birth data and returns the computed chart.
///
/// `POST /calculate`
///
/// The body is read as raw bytes so that malformed JSON, a non-object body
/// and missing or mistyped fields all surface as the same 400 response.
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, ApiError> {
    tracing::info!("calculate endpoint hit");

    let raw: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|err| ValidationErrors::body(format!("malformed JSON: {}", err)))?;
    tracing::debug!(body = %raw, "received raw JSON data");

    let input = BirthInput::from_json(&raw)?;
    tracing::info!(
        name = %input.name,
        date = %input.date,
        time = %input.time,
        lat = input.lat,
        lng = input.lng,
        "birth data validated"
    );

    let provider = Arc::clone(&state.provider);
    tracing::info!(provider = provider.name(), "computing chart");
    let chart = tokio::task::spawn_blocking(move || provider.compute(&input))
        .await
        .map_err(|err| ApiError::Internal(format!("chart task failed: {}", err)))??;
    tracing::info!("chart computed");

    let response = CalculateResponse::success(chart);
    tracing::debug!(?response, "sending success response");
    Ok(Json(response))
}
