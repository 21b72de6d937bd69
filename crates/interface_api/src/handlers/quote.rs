//! Premium estimation handler

use axum::{extract::State, Json};

use core_kernel::{Country, ProfileId};
use domain_quote::PremiumQuote;
use infra_db::repositories::ProfileRepository;

use crate::dto::quote::{InsuranceRequest, InsuranceResponse};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

const USER_NOT_FOUND: &str = "User not found";

/// `POST /insurance` - estimates the monthly premium for a stored profile
///
/// Looks up the profile's age in the requested country partition, applies
/// the static age brackets, and renders the result in the local currency.
pub async fn estimate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InsuranceRequest>,
) -> Result<Json<InsuranceResponse>, ApiError> {
    let country: Country = request.country.parse()?;

    // A malformed identifier can never match a stored profile
    let profile_id: ProfileId = request
        .unique_id
        .parse()
        .map_err(|_| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .find(country, &profile_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

    let age = profile
        .age_years()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let quote = PremiumQuote::estimate(&state.quote_table, &state.rate, country, age)?;

    Ok(Json(InsuranceResponse {
        unique_id: profile_id,
        insurance_premium: quote.display(),
    }))
}
