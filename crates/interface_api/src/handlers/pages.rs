//! Server-rendered pages
//!
//! The landing page lets the user pick a country; the search page drives the
//! catalog JSON endpoints from the browser. Templates are embedded at compile
//! time, with the validated country code substituted into the search page.

use axum::{extract::Path, response::Html};

use core_kernel::Country;

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const SEARCH_HTML: &str = include_str!("../../templates/search.html");

/// `GET /` - country selection landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /search/{country}` - catalog search page for a country
pub async fn search_page(Path(country): Path<String>) -> Result<Html<String>, ApiError> {
    let country: Country = country.parse()?;

    let page = SEARCH_HTML
        .replace("{{country}}", country.code())
        .replace("{{country_name}}", country.display_name());

    Ok(Html(page))
}
