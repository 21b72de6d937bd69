//! Catalog DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Country;
use domain_catalog::PolicyListing;

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Optional insurance type filter, e.g. `?type=Auto%20Insurance`
    #[serde(rename = "type")]
    pub insurance_type: Option<String>,
}

/// Response body for `GET /api/search/{country}`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub country: Country,
    pub policies: Vec<PolicyListing>,
    pub total: usize,
}

/// Response body for `GET /api/exchange-rate`
#[derive(Debug, Serialize)]
pub struct ExchangeRateResponse {
    pub usd_to_inr: Decimal,
    pub source: &'static str,
}
