//! Claims handlers

use axum::{
    extract::{Path, State},
    Json,
};

use domain_claims::ClaimId;

use crate::dto::{ClaimResponse, ClaimSummaryResponse};
use crate::{error::ApiError, AppState};

/// Lists every claim in the dataset
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.store.get_all_claims().await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = ClaimId::new(id);
    let claim = state
        .store
        .get_claim(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Claim {id} not found")))?;

    Ok(Json(claim.into()))
}

/// Summarizes a claim's notes
///
/// Answers 404 only for an unknown claim; a failing summarization provider
/// still yields 200 with the placeholder summary body.
pub async fn summarize_claim(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ClaimSummaryResponse>, ApiError> {
    let summary = state.summarizer.summarize(ClaimId::new(id)).await?;
    Ok(Json(summary.into()))
}
