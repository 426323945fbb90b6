//! Key-value persistence used by the controller.
//!
//! Values are whole serialized documents; a write replaces whatever was
//! stored under the key.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{db::driver::Db, error::StorageError};

#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Durable store backed by the embedded sled database.
#[derive(Debug, Clone)]
pub struct SledStore {
    db: Db,
}
impl SledStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KeyValueStore for SledStore {
    // sled calls block, so both sides run off the async workers
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let db = self.db.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || db.get(&key)).await?
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let db = self.db.clone();
        let (key, value) = (key.to_string(), value.to_string());
        tokio::task::spawn_blocking(move || {
            db.insert(&key, &value)?;
            db.flush().map_err(|source| StorageError::Write { key, source })
        })
        .await?
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_entry(key: &str, value: &str) -> Self {
        let entries = HashMap::from([(key.to_string(), value.to_string())]);
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[tokio::test]
    async fn test_memory_store_overwrites() -> Result<()> {
        let store = MemoryStore::new();
        assert!(store.read("key").await?.is_none());
        store.write("key", "one").await?;
        store.write("key", "two").await?;
        assert_eq!(store.read("key").await?.as_deref(), Some("two"));
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_store_with_entry() -> Result<()> {
        let store = MemoryStore::with_entry("key", "seeded");
        assert_eq!(store.read("key").await?.as_deref(), Some("seeded"));
        assert!(store.read("other").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_sled_store_round_trip() -> Result<()> {
        let store = SledStore::new(Db::temporary()?);
        assert!(store.read("TodoApp").await?.is_none());
        store.write("TodoApp", "[]").await?;
        store.write("TodoApp", r#"[{"id":1,"title":"a","completed":true}]"#).await?;
        assert_eq!(
            store.read("TodoApp").await?.as_deref(),
            Some(r#"[{"id":1,"title":"a","completed":true}]"#)
        );
        Ok(())
    }
}
