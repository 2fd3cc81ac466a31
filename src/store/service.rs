//! The single-document price store.
//!
//! Reads never fail the caller: any miss or retrieval error degrades to
//! the built-in default table. Writes are one non-retried overwrite and
//! require the storage token.

use crate::config::StorageConfig;
use crate::pricing::models::PriceTable;
use crate::store::blob::{BlobClient, StoreError};
use serde_json::Value;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

static DEFAULT_DOCUMENT: LazyLock<Value> =
    LazyLock::new(|| serde_json::to_value(PriceTable::default()).unwrap());

pub struct PriceStore {
    blob: BlobClient,
    key: String,
    token: Option<String>,
}

impl PriceStore {
    pub fn new(config: &StorageConfig) -> Result<Self, StoreError> {
        Ok(Self {
            blob: BlobClient::new(
                &config.base_url,
                Duration::from_secs(config.timeout_seconds),
            )?,
            key: config.key.clone(),
            token: config.token.clone(),
        })
    }

    /// The built-in fallback document.
    pub fn default_document() -> Value {
        DEFAULT_DOCUMENT.clone()
    }

    /// Current stored document, or the built-in default when there is
    /// nothing stored or retrieval fails.
    pub async fn current(&self) -> Value {
        match self.try_fetch().await {
            Ok(document) => document,
            Err(StoreError::MissingToken) => {
                debug!("storage token absent, serving default price table");
                Self::default_document()
            }
            Err(StoreError::NotFound(_)) => {
                debug!(key = %self.key, "no stored price table, serving default");
                Self::default_document()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "price table fetch failed, serving default");
                Self::default_document()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Value, StoreError> {
        let token = self.token.as_deref().ok_or(StoreError::MissingToken)?;
        let blobs = self.blob.list(token, &self.key).await?;
        let entry = blobs
            .iter()
            .find(|b| b.pathname == self.key)
            .or_else(|| blobs.first())
            .ok_or_else(|| StoreError::NotFound(self.key.clone()))?;
        self.blob.fetch_json(&entry.url).await
    }

    /// Overwrite the stored document, last write wins. The document is
    /// stored as-is; no structural validation happens here.
    pub async fn save(&self, document: &Value) -> Result<(), StoreError> {
        let token = self.token.as_deref().ok_or(StoreError::MissingToken)?;
        self.blob.put(token, &self.key, document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_matches_table_literal() {
        let document = PriceStore::default_document();
        assert_eq!(
            document,
            serde_json::to_value(PriceTable::default()).unwrap()
        );
        assert_eq!(document["extras"]["packageDiscountPct"], 5.0);
    }

    #[tokio::test]
    async fn test_missing_token_degrades_read_and_blocks_write() {
        let store = PriceStore::new(&StorageConfig::default()).unwrap();

        let document = store.current().await;
        assert_eq!(document, PriceStore::default_document());

        let result = store.save(&serde_json::json!({"base": {}})).await;
        assert!(matches!(result, Err(StoreError::MissingToken)));
    }
}
