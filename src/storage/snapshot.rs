//! Snapshot store port and typed JSON helpers.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Result type for snapshot store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Raw string key/value persistence contract.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`.
    ///
    /// Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Errors returned by snapshot stores and the JSON helpers.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backing store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The stored value under the key is not valid JSON for the target type.
    #[error("failed to decode snapshot '{key}': {reason}")]
    Decode {
        /// Key of the malformed snapshot.
        key: String,
        /// Decoder failure description.
        reason: String,
    },

    /// The value could not be encoded as JSON.
    #[error("failed to encode snapshot '{key}': {reason}")]
    Encode {
        /// Key of the snapshot being written.
        key: String,
        /// Encoder failure description.
        reason: String,
    },

    /// Backend I/O failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

/// Loads and decodes the JSON snapshot stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] when the stored text is not valid JSON
/// for `T`, or any error raised by the store itself.
pub async fn load_json<T, S>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    T: DeserializeOwned,
    S: SnapshotStore + ?Sized,
{
    let Some(raw) = store.get(key).await? else {
        debug!(key, "snapshot absent");
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|err| StorageError::Decode {
        key: key.to_owned(),
        reason: err.to_string(),
    })?;
    debug!(key, bytes = raw.len(), "snapshot loaded");
    Ok(Some(value))
}

/// Encodes `value` as JSON and stores it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] when serialization fails, or any error
/// raised by the store itself.
pub async fn save_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized + Sync,
    S: SnapshotStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|err| StorageError::Encode {
        key: key.to_owned(),
        reason: err.to_string(),
    })?;
    store.set(key, &raw).await?;
    debug!(key, bytes = raw.len(), "snapshot saved");
    Ok(())
}
