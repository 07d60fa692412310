//! 测试辅助

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio_test::block_on;
use trip_planner_core::traits::{InMemoryDataStore, InMemoryDestinationRegistry, InMemoryOfferCatalog};
use trip_planner_core::types::{TripEvent, UpdateScope, UserAction};
use trip_planner_core::{DataStore, EventBoard, ReferenceData, StoreError, StoreResult};

use crate::backend::{demo_data, StoreReply};
use crate::message::AppMessage;
use crate::model::{App, TerminalSurface};
use crate::update::update;

/// 演示数据上的应用，以及保存同一份事件的内存存储
pub fn test_fixture() -> (App, InMemoryDataStore) {
    let data = demo_data(Utc::now());
    let reference = ReferenceData::new(
        Arc::new(InMemoryDestinationRegistry::new(data.destinations)),
        Arc::new(InMemoryOfferCatalog::new(data.offers)),
    );

    let mut board = EventBoard::new(TerminalSurface::new(), reference);
    board.init(data.events.clone());

    (App::new(board), InMemoryDataStore::new(data.events))
}

pub fn test_app() -> App {
    test_fixture().0
}

/// 同步执行 outbox 中的请求，并把结果交回 update
pub fn flush(app: &mut App, store: &dyn DataStore) {
    for change in std::mem::take(&mut app.outbox) {
        app.in_flight += 1;
        let outcome = block_on(store.submit(change.action, &change.event, change.scope));
        update(app, AppMessage::StoreReply(StoreReply { change, outcome }));
    }
}

/// 拒绝所有修改的存储
pub struct RejectingStore;

#[async_trait]
impl DataStore for RejectingStore {
    async fn load(&self) -> StoreResult<Vec<TripEvent>> {
        Ok(Vec::new())
    }

    async fn submit(
        &self,
        _action: UserAction,
        _event: &TripEvent,
        _scope: UpdateScope,
    ) -> StoreResult<TripEvent> {
        Err(StoreError::Rejected {
            reason: "server unavailable".to_string(),
        })
    }
}
