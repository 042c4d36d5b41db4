use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::core::error::Result;

/// In-memory key-value store
///
/// Backs tests and ephemeral sessions; contents are lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("reports").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("reports", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("reports").await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("reports", "[]".to_string()).await.unwrap();
        store.set("reports", "[1]".to_string()).await.unwrap();
        assert_eq!(store.get("reports").await.unwrap(), Some("[1]".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();
        store.set("reports", "[]".to_string()).await.unwrap();
        store.remove("reports").await.unwrap();
        assert_eq!(store.get("reports").await.unwrap(), None);

        // Removing a missing key is a no-op
        store.remove("reports").await.unwrap();
    }
}
