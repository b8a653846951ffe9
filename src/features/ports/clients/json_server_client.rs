use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::core::config::PortStoreConfig;
use crate::core::error::{AppError, Result};
use crate::features::ports::clients::{PortListing, PortStore, StoreQuery};
use crate::features::ports::models::PortRecord;
use crate::shared::constants::TOTAL_COUNT_HEADER;

/// Client for a json-server style REST collection
pub struct JsonServerClient {
    http_client: reqwest::Client,
    collection_url: String,
}

impl JsonServerClient {
    pub fn new(config: &PortStoreConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent("PortAdmin/0.1")
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            collection_url: config.collection_url(),
        })
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, urlencoding::encode(id))
    }

    /// Turns a non-2xx response into an error carrying status and body
    async fn ensure_success(response: Response, action: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Port store error while {}: HTTP {} - {}", action, status, body);

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Port store: {}", action)));
        }

        Err(AppError::ExternalServiceError(format!(
            "Port store error while {}: HTTP {}",
            action, status
        )))
    }

    async fn parse_record(response: Response, action: &str) -> Result<PortRecord> {
        response.json::<PortRecord>().await.map_err(|e| {
            tracing::error!("Failed to parse port record while {}: {}", action, e);
            AppError::ExternalServiceError(format!("Failed to parse port record: {}", e))
        })
    }
}

fn send_error(action: &str, e: reqwest::Error) -> AppError {
    tracing::error!("Port store request failed while {}: {}", action, e);
    AppError::ExternalServiceError(format!("Port store request failed: {}", e))
}

#[async_trait]
impl PortStore for JsonServerClient {
    async fn list(&self, query: &StoreQuery) -> Result<PortListing> {
        let url = if query.is_empty() {
            self.collection_url.clone()
        } else {
            format!("{}?{}", self.collection_url, query.to_query_string())
        };

        tracing::debug!("Listing ports: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| send_error("listing ports", e))?;
        let response = Self::ensure_success(response, "listing ports").await?;

        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok());

        let rows = response.json::<Vec<PortRecord>>().await.map_err(|e| {
            tracing::error!("Failed to parse port listing: {}", e);
            AppError::ExternalServiceError(format!("Failed to parse port listing: {}", e))
        })?;

        Ok(PortListing { rows, total })
    }

    async fn get(&self, id: &str) -> Result<Option<PortRecord>> {
        let url = self.record_url(id);
        tracing::debug!("Fetching port: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| send_error("fetching port", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::ensure_success(response, "fetching port").await?;
        Self::parse_record(response, "fetching port").await.map(Some)
    }

    async fn create(&self, record: &PortRecord) -> Result<PortRecord> {
        tracing::debug!("Creating port {} at {}", record.id, self.collection_url);

        let response = self
            .http_client
            .post(&self.collection_url)
            .json(record)
            .send()
            .await
            .map_err(|e| send_error("creating port", e))?;
        let response = Self::ensure_success(response, "creating port").await?;

        Self::parse_record(response, "creating port").await
    }

    async fn update(&self, id: &str, record: &PortRecord) -> Result<PortRecord> {
        let url = self.record_url(id);
        tracing::debug!("Updating port: {}", url);

        let response = self
            .http_client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| send_error("updating port", e))?;
        let response = Self::ensure_success(response, "updating port").await?;

        Self::parse_record(response, "updating port").await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.record_url(id);
        tracing::debug!("Deleting port: {}", url);

        let response = self
            .http_client
            .delete(&url)
            .send()
            .await
            .map_err(|e| send_error("deleting port", e))?;
        Self::ensure_success(response, "deleting port").await?;

        Ok(())
    }
}
