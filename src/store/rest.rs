//! PostgREST client for the hosted image table.
//!
//! Reads select every column ordered by ascending id; writes post a single
//! JSON row with `Prefer: return=minimal`. Both authenticate with the service
//! key as `apikey` and bearer token.

use async_trait::async_trait;
use tracing::debug;

use super::{ImageStore, StoreError};
use crate::config::StoreConfig;
use crate::gallery::record::ImageRecord;

const REST_PREFIX: &str = "/rest/v1";

pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    table: String,
}

impl RestStore {
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            table: config.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}{}/{}", self.base_url, REST_PREFIX, self.table)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", self.service_key.as_str())
            .bearer_auth(&self.service_key)
    }
}

#[async_trait]
impl ImageStore for RestStore {
    async fn list_all_images(&self) -> Result<Option<Vec<ImageRecord>>, StoreError> {
        let request = self
            .http
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "id.asc")]);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let text = read_success(response).await?;
        parse_list_response(&text)
    }

    async fn insert_image(&self, record: &ImageRecord) -> Result<(), StoreError> {
        let request = self
            .http
            .post(self.table_url())
            .header("Prefer", "return=minimal")
            .json(record);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        read_success(response).await?;
        debug!(id = record.id, table = %self.table, "store insert acknowledged");
        Ok(())
    }
}

async fn read_success(response: reqwest::Response) -> Result<String, StoreError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;
    if !status.is_success() {
        return Err(StoreError::Status { status: status.as_u16(), body: text });
    }
    Ok(text)
}

/// Parse a select response. An empty body or a literal `null` is "no result".
pub(crate) fn parse_list_response(text: &str) -> Result<Option<Vec<ImageRecord>>, StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map_err(|e| StoreError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
