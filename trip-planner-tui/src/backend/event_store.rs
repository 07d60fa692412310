//! 事件存储
//!
//! 使用 JSON 文件存储行程事件及目的地、附加服务等参考数据
//! 实现 trip-planner-core 的 DataStore trait

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use trip_planner_core::traits::{DataStore, InMemoryDestinationRegistry, InMemoryOfferCatalog};
use trip_planner_core::types::{Destination, OfferGroup, TripEvent, UpdateScope, UserAction};
use trip_planner_core::{ReferenceData, StoreError, StoreResult};

use super::demo::demo_data;

/// 数据文件内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripData {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub offers: Vec<OfferGroup>,
    #[serde(default)]
    pub events: Vec<TripEvent>,
}

/// 基于 JSON 文件的事件存储
pub struct JsonEventStore {
    path: PathBuf,
    /// 内存缓存
    cache: Mutex<Option<TripData>>,
}

impl JsonEventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 从文件加载；文件不存在时写入演示数据
    async fn load_from_file(&self) -> StoreResult<TripData> {
        if !self.path.exists() {
            tracing::info!("No data file at {}, seeding demo trip", self.path.display());
            let data = demo_data(Utc::now());
            self.save_to_file(&data).await?;
            return Ok(data);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn save_to_file(&self, data: &TripData) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::Storage(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    /// 读取缓存，缓存为空时从文件加载
    async fn snapshot(&self) -> StoreResult<TripData> {
        let mut cache = self.cache.lock().await;
        let data = self.loaded(&mut cache).await?.clone();
        Ok(data)
    }

    /// 在持有缓存锁的情况下确保数据已加载
    async fn loaded<'a>(&self, cache: &'a mut Option<TripData>) -> StoreResult<&'a mut TripData> {
        let data = match cache.take() {
            Some(data) => data,
            None => self.load_from_file().await?,
        };
        Ok(cache.insert(data))
    }

    /// 目的地和附加服务
    pub async fn reference(&self) -> StoreResult<ReferenceData> {
        let data = self.snapshot().await?;
        Ok(ReferenceData::new(
            Arc::new(InMemoryDestinationRegistry::new(data.destinations)),
            Arc::new(InMemoryOfferCatalog::new(data.offers)),
        ))
    }
}

#[async_trait]
impl DataStore for JsonEventStore {
    async fn load(&self) -> StoreResult<Vec<TripEvent>> {
        Ok(self.snapshot().await?.events)
    }

    async fn submit(
        &self,
        action: UserAction,
        event: &TripEvent,
        scope: UpdateScope,
    ) -> StoreResult<TripEvent> {
        // 整个读-改-写过程持有同一把锁，并发请求按顺序落盘
        let mut cache = self.cache.lock().await;
        let data = self.loaded(&mut cache).await?;

        let pos = data
            .events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| StoreError::NotFound {
                id: event.id.clone(),
            })?;

        // 先在副本上修改，写入失败时缓存保持不变
        let mut next = data.clone();
        let applied = match action {
            UserAction::Update => {
                next.events[pos] = event.clone();
                event.clone()
            }
            UserAction::Delete => next.events.remove(pos),
        };

        self.save_to_file(&next).await?;
        *data = next;
        drop(cache);

        tracing::debug!("Stored {action:?} of {} ({scope:?})", event.id);
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;
    use trip_planner_core::types::EventId;

    #[test]
    fn missing_file_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonEventStore::new(dir.path().join("events.json"));

        let events = block_on(store.load()).unwrap();
        assert!(!events.is_empty());
        assert!(store.path().exists());

        let reference = block_on(store.reference()).unwrap();
        assert!(reference.destinations.by_name("geneva").is_some());
    }

    #[test]
    fn update_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let store = JsonEventStore::new(&path);
        let mut event = block_on(store.load()).unwrap().remove(0);
        event.base_price = 4242;

        let applied = block_on(store.submit(UserAction::Update, &event, UpdateScope::Minor)).unwrap();
        assert_eq!(applied.base_price, 4242);

        let reopened = JsonEventStore::new(&path);
        let stored = block_on(reopened.load()).unwrap();
        assert_eq!(
            stored.iter().find(|e| e.id == event.id).map(|e| e.base_price),
            Some(4242)
        );
    }

    #[test]
    fn delete_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let store = JsonEventStore::new(&path);
        let events = block_on(store.load()).unwrap();
        let victim = events[0].clone();

        block_on(store.submit(UserAction::Delete, &victim, UpdateScope::Major)).unwrap();

        let stored = block_on(JsonEventStore::new(&path).load()).unwrap();
        assert_eq!(stored.len(), events.len() - 1);
        assert!(stored.iter().all(|e| e.id != victim.id));
    }

    #[test]
    fn concurrent_updates_are_all_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let store = Arc::new(JsonEventStore::new(&path));
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(4)
            .enable_all()
            .build()
            .unwrap();

        let events = runtime.block_on(store.load()).unwrap();
        assert!(events.len() >= 2);

        for round in 0..20 {
            let handles: Vec<_> = events
                .iter()
                .take(2)
                .cloned()
                .map(|mut event| {
                    event.base_price = 1000 + round;
                    let store = Arc::clone(&store);
                    runtime.spawn(async move {
                        store
                            .submit(UserAction::Update, &event, UpdateScope::Minor)
                            .await
                    })
                })
                .collect();
            for handle in handles {
                runtime.block_on(handle).unwrap().unwrap();
            }

            let stored = runtime.block_on(JsonEventStore::new(&path).load()).unwrap();
            for event in events.iter().take(2) {
                let price = stored.iter().find(|e| e.id == event.id).map(|e| e.base_price);
                assert_eq!(price, Some(1000 + round), "round {round}");
            }
        }
    }

    #[test]
    fn unknown_event_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonEventStore::new(dir.path().join("events.json"));
        let mut ghost = block_on(store.load()).unwrap().remove(0);
        ghost.id = EventId::from("ghost");

        let result = block_on(store.submit(UserAction::Update, &ghost, UpdateScope::Patch));
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = block_on(JsonEventStore::new(&path).load());
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
