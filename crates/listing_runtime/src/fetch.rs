use std::time::Duration;

use futures_util::StreamExt;
use listing_core::{ListQuery, ListingPage, ListingRow, PageMeta, ScreenConfig};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Loads one page of a listing from the backend.
#[async_trait::async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch(
        &self,
        config: &ScreenConfig,
        query: &ListQuery,
    ) -> Result<ListingPage, FetchError>;
}

#[derive(Deserialize)]
struct RawPage {
    items: Vec<Value>,
    meta: PageMeta,
}

#[derive(Deserialize)]
struct RawError {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestListingFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestListingFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Endpoint URL for `query`, e.g. `/api/artworks?page=1&pageSize=6&category=PAINTING`.
    pub fn request_url(
        &self,
        config: &ScreenConfig,
        query: &ListQuery,
    ) -> Result<reqwest::Url, FetchError> {
        let raw = format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            config.resource
        );
        let mut url = reqwest::Url::parse(&raw)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(query.to_pairs(&config.mapping.filter_key));
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ListingFetcher for ReqwestListingFetcher {
    async fn fetch(
        &self,
        config: &ScreenConfig,
        query: &ListQuery,
    ) -> Result<ListingPage, FetchError> {
        let url = self.request_url(config, query)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            // Prefer the backend's own message when the error body carries one.
            let message = self
                .read_body(response)
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<RawError>(&body).ok())
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Request failed with status {code}"));
            return Err(FetchError::new(FailureKind::HttpStatus(code), message));
        }

        let body = self.read_body(response).await?;
        let raw: RawPage = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

        Ok(ListingPage {
            rows: raw
                .items
                .iter()
                .map(|item| to_row(item, &config.label_field))
                .collect(),
            meta: raw.meta,
        })
    }
}

fn to_row(item: &Value, label_field: &str) -> ListingRow {
    let id = item.get("id").and_then(Value::as_i64);
    let label = item
        .get(label_field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| id.map(|id| format!("#{id}")))
        .unwrap_or_default();
    ListingRow { id, label }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_use_the_label_field_or_fall_back_to_id() {
        let titled = to_row(&json!({"id": 7, "title": "Water Lilies"}), "title");
        assert_eq!(titled.id, Some(7));
        assert_eq!(titled.label, "Water Lilies");

        let untitled = to_row(&json!({"id": 8}), "title");
        assert_eq!(untitled.label, "#8");

        let bare = to_row(&json!({}), "name");
        assert_eq!(bare, ListingRow { id: None, label: String::new() });
    }
}
