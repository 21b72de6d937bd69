//! Catalog handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use core_kernel::{exchange::RATE_SOURCE, Country};
use domain_catalog::PolicyListing;
use infra_db::repositories::CatalogRepository;

use crate::dto::catalog::{ExchangeRateResponse, SearchParams, SearchResponse};
use crate::error::ApiError;
use crate::AppState;

/// `GET /api/types/{country}` - distinct insurance types, alphabetical
pub async fn list_types(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let country: Country = country.parse()?;

    let repo = CatalogRepository::new(state.pool.clone());
    let types = repo.list_types(country).await?;

    Ok(Json(types))
}

/// `GET /api/search/{country}?type=...` - policies ordered by premium
pub async fn search(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let country: Country = country.parse()?;

    let repo = CatalogRepository::new(state.pool.clone());
    let policies = repo
        .search(country, params.insurance_type.as_deref())
        .await?;

    let listings = PolicyListing::render_all(&policies, &state.rate)?;
    let total = listings.len();

    Ok(Json(SearchResponse {
        country,
        policies: listings,
        total,
    }))
}

/// `GET /api/exchange-rate` - the fixed USD to INR rate
pub async fn exchange_rate(State(state): State<AppState>) -> Json<ExchangeRateResponse> {
    Json(ExchangeRateResponse {
        usd_to_inr: state.rate.usd_to_inr(),
        source: RATE_SOURCE,
    })
}
