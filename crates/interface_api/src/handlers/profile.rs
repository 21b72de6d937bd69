//! Profile registration handler

use axum::{extract::State, Json};
use validator::Validate;

use core_kernel::Country;
use infra_db::repositories::{profile::NewProfile, ProfileRepository};

use crate::dto::quote::{UploadRequest, UploadResponse, DUPLICATE_RECORD_MESSAGE};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// `POST /upload` - registers a profile and returns its identifier
///
/// A repeated first name within the same country partition is not an error:
/// the previously assigned identifier comes back with a duplicate notice.
pub async fn upload(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UploadRequest>,
) -> Result<Json<UploadResponse>, ApiError> {
    let country: Country = request.country.parse()?;

    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let profile = NewProfile {
        first_name: request.first_name,
        age: request.age,
        street_name: request.street_name,
        city: request.city,
        state: request.state,
        zip_code: request.zip_code,
    };

    let repo = ProfileRepository::new(state.pool.clone());
    let registration = repo.register(country, &profile).await?;

    Ok(Json(UploadResponse {
        unique_id: registration.id,
        error: (!registration.created).then_some(DUPLICATE_RECORD_MESSAGE),
    }))
}
