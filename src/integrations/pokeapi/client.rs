// src/integrations/pokeapi/client.rs
//
// PokeAPI Integration
//
// ARCHITECTURE:
// - Read-only REST client for https://pokeapi.co
// - Returns raw payloads; slimming happens in the detail pipeline
// - No retries and no request timeout: a hung transport hangs the caller
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Every transport, status or body failure maps to AppError::Network

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::domain::RosterEntry;
use crate::error::{AppError, AppResult};
use crate::integrations::pokeapi::payload::{RawDetail, RawSpecies, RosterPage};

/// Remote catalog seam. Production uses `PokeApiClient`; tests mock it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// One page of the roster, in catalog order
    async fn fetch_roster_page(&self, limit: u32, offset: u32) -> AppResult<Vec<RosterEntry>>;

    /// Full detail document behind a roster entry's locator
    async fn fetch_detail_payload(&self, locator: &str) -> AppResult<RawDetail>;

    /// Species document for a catalog id
    async fn fetch_description_payload(&self, id: u32) -> AppResult<RawSpecies>;
}

/// PokeAPI HTTP client
pub struct PokeApiClient {
    base_url: String,
    http_client: Client,
}

impl PokeApiClient {
    /// Create a client against `base_url`, e.g. `https://pokeapi.co/api/v2`
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_http_client(base_url, http_client))
    }

    /// Client over a preconfigured `reqwest::Client`
    pub fn with_http_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn roster_url(&self, limit: u32, offset: u32) -> String {
        format!("{}/pokemon?limit={}&offset={}", self.base_url, limit, offset)
    }

    /// Description locator, derived from the id alone
    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}/", self.base_url, id)
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("PokeAPI request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "PokeAPI returned status {} for {}",
                response.status(),
                url
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse PokeAPI response from {}: {}", url, e)))
    }
}

#[async_trait]
impl CatalogClient for PokeApiClient {
    async fn fetch_roster_page(&self, limit: u32, offset: u32) -> AppResult<Vec<RosterEntry>> {
        let page: RosterPage = self.get_json(&self.roster_url(limit, offset)).await?;
        Ok(page.into_entries())
    }

    async fn fetch_detail_payload(&self, locator: &str) -> AppResult<RawDetail> {
        self.get_json(locator).await
    }

    async fn fetch_description_payload(&self, id: u32) -> AppResult<RawSpecies> {
        self.get_json(&self.species_url(id)).await
    }
}
