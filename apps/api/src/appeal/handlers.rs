//! Axum route handlers for the appeal API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAppealRequest {
    /// Optional so an absent field surfaces as our 400, not a rejection
    /// from the JSON extractor.
    #[serde(default)]
    pub business_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAppealResponse {
    pub business_model_overview: String,
    pub business_model_details: String,
    pub additional_info: String,
}

/// POST /generate-appeal
///
/// Drafts a policy appeal for the given business name. One upstream call,
/// no retries; any failure aborts the request with a cause-specific message.
pub async fn handle_generate_appeal(
    State(state): State<AppState>,
    Json(request): Json<GenerateAppealRequest>,
) -> Result<Json<GenerateAppealResponse>, AppError> {
    let business_name = request.business_name.unwrap_or_default();

    let result = state.generator.generate(&business_name).await?;

    Ok(Json(GenerateAppealResponse {
        business_model_overview: result.overview,
        business_model_details: result.details,
        additional_info: result.additional,
    }))
}
