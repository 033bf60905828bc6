use mindcare_core::models::progress::PersistedProgress;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON state value stored under `key`.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key)?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Save a JSON state value under `key`, replacing the previous value.
pub fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body)
}

/// Overwrite the stored progress record. Idempotent: saving the same
/// record twice leaves the same stored value.
pub fn save_progress(
    store: &dyn KeyValueStore,
    key: &str,
    progress: &PersistedProgress,
) -> Result<(), StorageError> {
    save_state(store, key, progress)?;
    tracing::debug!(key, user_id = %progress.user_id, "progress saved");
    Ok(())
}

pub fn load_progress(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<PersistedProgress, StorageError> {
    load_state(store, key)
}
