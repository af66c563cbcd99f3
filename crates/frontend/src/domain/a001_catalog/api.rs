//! Remote catalog client
//!
//! Read-only, unauthenticated GETs against the configured endpoint. Every
//! failure (transport, non-2xx, bad JSON) is reported as a [`FetchError`].

use crate::shared::config::CatalogConfig;
use contracts::domain::a001_catalog_entry::{CatalogEntry, CatalogListQuery, CatalogListResponse};
use contracts::domain::a002_species_detail::{DetailRecord, SpeciesDetailDto};
use contracts::shared::error::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// `<endpoint>?limit=N`
pub fn list_url(config: &CatalogConfig) -> Result<String, FetchError> {
    let query = serde_qs::to_string(&CatalogListQuery::with_limit(config.api.list_limit))
        .map_err(|e| FetchError::new(format!("Failed to build query: {}", e)))?;
    Ok(format!("{}?{}", endpoint(config), query))
}

/// `<endpoint>/<name>`
pub fn detail_url(config: &CatalogConfig, name: &str) -> String {
    format!("{}/{}", endpoint(config), urlencoding::encode(name))
}

fn endpoint(config: &CatalogConfig) -> &str {
    config.api.endpoint.trim_end_matches('/')
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(FetchError::transport)?;

    if !response.ok() {
        return Err(FetchError::status(response.status()));
    }

    response.json::<T>().await.map_err(FetchError::decode)
}

/// Fetch the full catalog in one request (capped by `api.list_limit`)
pub async fn fetch_catalog(config: &CatalogConfig) -> Result<Vec<CatalogEntry>, FetchError> {
    let url = list_url(config)?;
    log::debug!("GET {}", url);
    let data: CatalogListResponse = get_json(&url).await?;
    Ok(data.results)
}

/// Fetch the detail record of one entry
pub async fn fetch_detail(config: &CatalogConfig, name: &str) -> Result<DetailRecord, FetchError> {
    let url = detail_url(config, name);
    log::debug!("GET {}", url);
    let dto: SpeciesDetailDto = get_json(&url).await?;
    Ok(dto.into())
}
