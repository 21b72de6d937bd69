//! Profile registration and premium estimation DTOs
//!
//! The country and identifier arrive as free text and are parsed in the
//! handlers; together with the `ApiJson` extractor this keeps every
//! rejection in the API's JSON error shape.

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ProfileId;

/// The duplicate-submission notice returned alongside the existing id
pub const DUPLICATE_RECORD_MESSAGE: &str = "Record already exists";

/// Request body for `POST /upload`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Country code, "usa" or "india"
    pub country: String,

    #[validate(length(min = 1, max = 100, message = "first name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    pub age: u32,

    #[validate(length(min = 1, max = 200, message = "street name must not be empty"))]
    pub street_name: String,

    #[validate(length(min = 1, max = 100, message = "city must not be empty"))]
    pub city: String,

    #[validate(length(min = 1, max = 100, message = "state must not be empty"))]
    pub state: String,

    #[validate(length(min = 1, max = 20, message = "zip code must not be empty"))]
    pub zip_code: String,
}

/// Response body for `POST /upload`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub unique_id: ProfileId,
    /// Set to the duplicate notice when the first name was already
    /// registered in this country partition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Request body for `POST /insurance`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRequest {
    /// Country code, "usa" or "india"
    pub country: String,
    /// The identifier returned by `POST /upload`
    pub unique_id: String,
}

/// Response body for `POST /insurance`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceResponse {
    pub unique_id: ProfileId,
    /// Localized display string, e.g. "$200 per month"
    pub insurance_premium: String,
}
