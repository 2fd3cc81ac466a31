//! Thin client for the blob backend holding the price document.
//!
//! The backend exposes a token-gated listing endpoint, public content
//! URLs, and an overwriting put (no suffixing, last write wins).

use reqwest::{header, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document stored under the requested key
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("storage request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("storage responded with status {0}")]
    BadStatus(StatusCode),
    #[error("stored document is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    /// Storage access token is not configured in the environment
    #[error("storage access token is not configured")]
    MissingToken,
}

/// One entry in a listing response
#[derive(Debug, Clone, Deserialize)]
pub struct BlobEntry {
    pub pathname: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    blobs: Vec<BlobEntry>,
}

pub struct BlobClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlobClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List stored blobs matching a key prefix.
    pub async fn list(&self, token: &str, prefix: &str) -> Result<Vec<BlobEntry>, StoreError> {
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .query(&[("prefix", prefix)])
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::BadStatus(response.status()));
        }

        let listing: ListResponse = response.json().await?;
        Ok(listing.blobs)
    }

    /// Follow-up fetch of a listed document's public URL.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, StoreError> {
        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(url.to_string()));
        }
        if !response.status().is_success() {
            return Err(StoreError::BadStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Overwrite the document stored under `pathname`.
    pub async fn put(&self, token: &str, pathname: &str, document: &Value) -> Result<(), StoreError> {
        let body = serde_json::to_string(document)?;
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, pathname))
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::BadStatus(response.status()));
        }

        Ok(())
    }
}
