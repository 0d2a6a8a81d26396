//! Opaque counter store

use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;

/// A key-value counter store
///
/// The minimal surface analytics needs: increment a counter, read many
/// counters at once, and enumerate keys by prefix. An external store
/// (e.g. Redis) can stand in behind the same trait.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment the counter at `key`, returning the new value
    async fn incr(&self, key: &str) -> Result<u64>;

    /// Read many counters at once; missing keys read as 0
    async fn multi_get(&self, keys: &[String]) -> Result<Vec<u64>>;

    /// All keys starting with `prefix`
    async fn keys(&self, prefix: &str) -> Result<Vec<String>>;
}

/// In-process counter store
#[derive(Debug, Default)]
pub struct MemoryStore {
    counters: DashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn incr(&self, key: &str) -> Result<u64> {
        let mut entry = self.counters.entry(key.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }

    async fn multi_get(&self, keys: &[String]) -> Result<Vec<u64>> {
        Ok(keys
            .iter()
            .map(|k| self.counters.get(k).map(|v| *v).unwrap_or(0))
            .collect())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .counters
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|k| k.starts_with(prefix))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_incr_and_multi_get() {
        let store = MemoryStore::new();
        assert_eq!(store.incr("a").await.unwrap(), 1);
        assert_eq!(store.incr("a").await.unwrap(), 2);
        assert_eq!(store.incr("b").await.unwrap(), 1);

        let values = store
            .multi_get(&["a".into(), "missing".into(), "b".into()])
            .await
            .unwrap();
        assert_eq!(values, vec![2, 0, 1]);
    }

    #[tokio::test]
    async fn test_keys_by_prefix() {
        let store = MemoryStore::new();
        store.incr("pv:x").await.unwrap();
        store.incr("pv:y").await.unwrap();
        store.incr("bot:z").await.unwrap();

        let mut keys = store.keys("pv:").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["pv:x".to_string(), "pv:y".to_string()]);
    }
}
