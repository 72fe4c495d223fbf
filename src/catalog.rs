//! # Catalog Client
//!
//! Async client for the public cocktail catalog. Search is delegated entirely to
//! the catalog's `search.php?s=<query>` endpoint; this module only transports the
//! request, retries transient failures and decodes the fixed record shape.

use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;

use crate::catalog_errors::CatalogError;
use crate::config::{AppConfig, RecoveryConfig};
use crate::recipe_model::{RecipeRecord, SearchResponse};

/// Client for the recipe catalog HTTP API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    recovery: RecoveryConfig,
}

impl CatalogClient {
    /// Build a client from application configuration
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Catalog client configured for {}", config.api_base_url);
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            recovery: config.recovery.clone(),
        })
    }

    /// Search drinks by name
    ///
    /// A blank query returns an empty batch without contacting the catalog.
    pub async fn search(&self, query: &str) -> Result<Vec<RecipeRecord>, CatalogError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("Blank search query, skipping request");
            return Ok(Vec::new());
        }

        let mut attempt = 0;
        loop {
            match self.search_once(query).await {
                Ok(records) => {
                    info!("Search '{}' returned {} drinks", query, records.len());
                    return Ok(records);
                }
                Err(e) if e.is_retryable() && attempt < self.recovery.max_retries => {
                    attempt += 1;
                    let delay = calculate_retry_delay(attempt, &self.recovery);
                    warn!(
                        "Search '{}' failed ({}), retry {}/{} in {}ms",
                        query, e, attempt, self.recovery.max_retries, delay
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn search_once(&self, query: &str) -> Result<Vec<RecipeRecord>, CatalogError> {
        let url = format!("{}/search.php", self.base_url);
        let response = self.http.get(&url).query(&[("s", query)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

/// Decode a search response body into its drinks
pub fn parse_search_response(body: &str) -> Result<Vec<RecipeRecord>, CatalogError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.into_records())
}

/// Exponential backoff with up to 10% random jitter, capped at the configured maximum
pub fn calculate_retry_delay(attempt: u32, recovery: &RecoveryConfig) -> u64 {
    let exponent = attempt.saturating_sub(1).min(16);
    let delay = recovery
        .base_retry_delay_ms
        .saturating_mul(1u64 << exponent)
        .min(recovery.max_retry_delay_ms);

    let jitter = rand::thread_rng().gen_range(0..=delay / 10);
    delay + jitter
}
