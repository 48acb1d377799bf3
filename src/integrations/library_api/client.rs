// src/integrations/library_api/client.rs
//
// Library REST API Integration
//
// ARCHITECTURE:
// - Thin JSON-over-HTTP client for the inventory backend
// - No retry, no caching, no request deduplication
// - Transport failures and non-2xx statuses both surface as network errors
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never validates or builds domain entities itself
// - Repositories decide which paths to call

use crate::error::{AppError, AppResult};
use crate::infrastructure::AppConfig;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Library REST API client
#[derive(Debug, Clone)]
pub struct LibraryApiClient {
    base_url: String,
    http_client: Client,
}

impl LibraryApiClient {
    /// Create a new client against `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(&config.api_base_url, config.http_timeout)
    }

    /// Absolute URL for a resource path such as `books`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET {base}/{path}` and decode the JSON body
    pub async fn get_json<T>(&self, path: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Network(format!("GET {} failed: {}", url, e)))?;

        Self::decode(url, response).await
    }

    /// `POST {base}/{path}` with a JSON body and decode the JSON reply
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        log::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("POST {} failed: {}", url, e)))?;

        Self::decode(url, response).await
    }

    // ========================================================================
    // INTERNAL: Response handling
    // ========================================================================

    async fn decode<T>(url: String, response: reqwest::Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} returned status {}", url, status);
            return Err(AppError::ApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to decode response from {}: {}", url, e)))
    }
}
