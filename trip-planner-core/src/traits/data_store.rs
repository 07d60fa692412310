//! Data store abstract Trait

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::types::{TripEvent, UpdateScope, UserAction};

/// Data Store Trait
///
/// Backing store for trip events. Platform layers inject their own
/// implementation (JSON file, remote API, ...).
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Load every stored event
    async fn load(&self) -> StoreResult<Vec<TripEvent>>;

    /// Apply a change
    ///
    /// # Arguments
    /// * `action` - Update or delete
    /// * `event` - Updated record, or the record to delete
    /// * `scope` - Refresh scope the caller will apply (hint only)
    ///
    /// Returns the record as stored (for a delete, the removed record).
    async fn submit(
        &self,
        action: UserAction,
        event: &TripEvent,
        scope: UpdateScope,
    ) -> StoreResult<TripEvent>;
}

/// In-memory data store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryDataStore {
    events: Arc<RwLock<Vec<TripEvent>>>,
}

impl InMemoryDataStore {
    /// Create a store holding `events`
    #[must_use]
    pub fn new(events: Vec<TripEvent>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

#[async_trait]
impl DataStore for InMemoryDataStore {
    async fn load(&self) -> StoreResult<Vec<TripEvent>> {
        Ok(self.events.read().await.clone())
    }

    async fn submit(
        &self,
        action: UserAction,
        event: &TripEvent,
        _scope: UpdateScope,
    ) -> StoreResult<TripEvent> {
        let mut events = self.events.write().await;
        let index = events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| StoreError::NotFound {
                id: event.id.clone(),
            })?;

        match action {
            UserAction::Update => {
                events[index] = event.clone();
                Ok(event.clone())
            }
            UserAction::Delete => Ok(events.remove(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, event};

    #[tokio::test]
    async fn update_replaces_stored_record() {
        let store = InMemoryDataStore::new(vec![event("e1", 20, at(1), at(2))]);
        let updated = event("e1", 99, at(1), at(2));

        let applied = store
            .submit(UserAction::Update, &updated, UpdateScope::Minor)
            .await
            .unwrap();

        assert_eq!(applied.base_price, 99);
        assert_eq!(store.load().await.unwrap()[0].base_price, 99);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryDataStore::new(vec![
            event("e1", 20, at(1), at(2)),
            event("e2", 30, at(3), at(4)),
        ]);
        let target = event("e1", 20, at(1), at(2));

        store
            .submit(UserAction::Delete, &target, UpdateScope::Major)
            .await
            .unwrap();

        let remaining = store.load().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id.as_str(), "e2");
    }

    #[tokio::test]
    async fn unknown_record_is_not_found() {
        let store = InMemoryDataStore::default();
        let result = store
            .submit(UserAction::Update, &event("ghost", 1, at(1), at(2)), UpdateScope::Patch)
            .await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
