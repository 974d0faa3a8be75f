use std::sync::Arc;

use tokio::sync::RwLock;

/// An ordered, in-memory collection of one record kind.
///
/// Clones share the same underlying sequence.
#[derive(Clone, Debug, Default)]
pub struct Catalog<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> Catalog<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .find(|record| predicate(*record))
            .cloned()
    }

    /// Puts `record` at the head and returns the new length.
    pub async fn prepend(&self, record: T) -> usize {
        let mut records = self.records.write().await;
        records.insert(0, record);
        records.len()
    }
}
