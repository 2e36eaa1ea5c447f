//! Typed load/save of whole documents.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{PersistenceError, Result};
use crate::store::StateStore;

/// Read and decode the document under `key`.
///
/// `Ok(None)` when nothing is stored.
pub fn try_load<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: StateStore + ?Sized,
{
    let Some(contents) = store.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| PersistenceError::Deserialization {
            key: key.to_string(),
            source,
        })
}

/// Load the document under `key`, or `default` when it is absent, unreadable
/// or does not match `T`.
pub fn load<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: StateStore + ?Sized,
{
    match try_load(store, key) {
        Ok(Some(value)) => {
            tracing::debug!(key, "Restored persisted document");
            value
        }
        Ok(None) => {
            tracing::debug!(key, "No persisted document, using defaults");
            default
        }
        Err(error) => {
            tracing::warn!(key, %error, "Discarding unreadable persisted document");
            default
        }
    }
}

/// Encode and store `value` under `key`.
pub fn try_save<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: StateStore + ?Sized,
{
    let contents =
        serde_json::to_string(value).map_err(|source| PersistenceError::Serialization {
            key: key.to_string(),
            source,
        })?;
    store.write(key, &contents)
}

/// Store `value` under `key`, logging instead of returning failures.
pub fn save<T, S>(store: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: StateStore + ?Sized,
{
    if let Err(error) = try_save(store, key, value) {
        tracing::warn!(key, %error, reason = %error.user_message(), "Failed to persist document");
    }
}
