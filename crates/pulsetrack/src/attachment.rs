//! Photo attachment for individual records.
//!
//! The storage key derives deterministically from the record identifier, so
//! at most one photo is retained per individual: a second upload overwrites
//! the first. The transfer itself is delegated to external object storage.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{AccessLevel, Config};
use crate::error::{Error, Result};
use crate::session::Session;

/// Derive the storage key for an individual's photo.
///
/// The key is the record identifier under the access-level prefix; it never
/// depends on the source file name.
#[must_use]
pub fn photo_key(level: AccessLevel, individual_id: Uuid) -> String {
    format!("{level}/{individual_id}")
}

/// Seam for the external object storage provider.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write an object at the given key, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the object cannot be written.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()>;
}

/// Object store backed by an HTTP endpoint.
#[derive(Debug)]
pub struct HttpObjectStore {
    endpoint: reqwest::Url,
    client: reqwest::Client,
    token: String,
}

impl HttpObjectStore {
    /// Build the store from configuration and a signed-in session.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage endpoint is missing/invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config, session: &Session) -> Result<Self> {
        let endpoint = config.storage_endpoint()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            endpoint,
            client,
            token: session.token().to_string(),
        })
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let url = self
            .endpoint
            .join(key)
            .map_err(|e| Error::upload(key, format!("invalid storage URL: {e}")))?;

        debug!(key, size = bytes.len(), "uploading photo");
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.token)
            .body(bytes)
            .send()
            .await?;

        if let Err(e) = response.error_for_status_ref() {
            return Err(Error::upload(key, e.to_string()));
        }
        Ok(())
    }
}

/// Attach a photo file to an individual record.
///
/// Reads the file, derives the storage key from the record identifier, and
/// delegates the upload. No local validation of file type or size is
/// performed. Returns the storage key.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the upload fails.
pub async fn attach_photo(
    store: &dyn ObjectStore,
    level: AccessLevel,
    individual_id: Uuid,
    path: &Path,
) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| Error::PhotoRead {
            path: path.to_path_buf(),
            source,
        })?;

    let key = photo_key(level, individual_id);
    store.put(&key, bytes).await?;
    info!(key, "photo attached");
    Ok(key)
}
