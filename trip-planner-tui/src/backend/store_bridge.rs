//! 存储桥接
//!
//! 主循环是同步的，存储请求在 tokio 运行时上执行，
//! 结果通过 channel 送回，由主循环在下一轮取出。

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use trip_planner_core::types::{PendingChange, TripEvent};
use trip_planner_core::{DataStore, StoreResult};

/// 一次存储请求的结果
#[derive(Debug, Clone)]
pub struct StoreReply {
    pub change: PendingChange,
    pub outcome: StoreResult<TripEvent>,
}

pub struct StoreBridge {
    handle: Handle,
    store: Arc<dyn DataStore>,
    tx: UnboundedSender<StoreReply>,
    rx: UnboundedReceiver<StoreReply>,
}

impl StoreBridge {
    pub fn new(handle: Handle, store: Arc<dyn DataStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            store,
            tx,
            rx,
        }
    }

    /// 在后台提交变更
    pub fn submit(&self, change: PendingChange) {
        let store = self.store.clone();
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let outcome = store
                .submit(change.action, &change.event, change.scope)
                .await;
            if tx.send(StoreReply { change, outcome }).is_err() {
                tracing::warn!("Store reply dropped: main loop has exited");
            }
        });
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<StoreReply> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use trip_planner_core::traits::InMemoryDataStore;
    use trip_planner_core::types::{ChangeSource, UpdateScope, UserAction};

    use crate::backend::demo_data;

    #[test]
    fn reply_comes_back_through_channel() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let events = demo_data(chrono::Utc::now()).events;
        let store = Arc::new(InMemoryDataStore::new(events.clone()));
        let mut bridge = StoreBridge::new(runtime.handle().clone(), store);

        let change = PendingChange {
            origin: events[0].id.clone(),
            action: UserAction::Update,
            event: events[0].with_favorite_toggled(),
            scope: UpdateScope::Patch,
            source: ChangeSource::Favorite,
        };
        bridge.submit(change);

        let mut reply = None;
        for _ in 0..100 {
            reply = bridge.try_recv();
            if reply.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        let reply = reply.unwrap();
        assert!(reply.outcome.unwrap().is_favorite != events[0].is_favorite);
    }
}
