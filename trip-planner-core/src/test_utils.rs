//! Test helpers
//!
//! Mock collaborators, fixtures and factory methods.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::presenter::{
    ContainerId, EventBoard, Node, NodeId, NodeRef, PresenterEnv, ReferenceData,
};
use crate::traits::{
    DataStore, InMemoryDataStore, InMemoryDestinationRegistry, InMemoryOfferCatalog,
    RenderTarget,
};
use crate::types::{
    Destination, DestinationId, EventId, EventType, Offer, OfferGroup, OfferId, TripEvent,
    UpdateScope, UserAction,
};

// ===== Fixtures =====

/// `hour` hours after a fixed base instant
pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 18, 0, 0, 0).unwrap() + TimeDelta::hours(i64::from(hour))
}

/// Taxi ride to Amsterdam with no offers
pub fn event(id: &str, price: u32, from: DateTime<Utc>, to: DateTime<Utc>) -> TripEvent {
    TripEvent {
        id: EventId::from(id),
        event_type: EventType::Taxi,
        destination: DestinationId::from("amsterdam"),
        date_from: from,
        date_to: to,
        base_price: price,
        offers: BTreeSet::new(),
        is_favorite: false,
    }
}

fn destination(id: &str, name: &str) -> Destination {
    Destination {
        id: DestinationId::from(id),
        name: name.to_string(),
        description: format!("{name} is a lovely place"),
        pictures: Vec::new(),
    }
}

fn offer(id: &str, title: &str, price: u32) -> Offer {
    Offer {
        id: OfferId::from(id),
        title: title.to_string(),
        price,
    }
}

pub fn fixture_destinations() -> InMemoryDestinationRegistry {
    InMemoryDestinationRegistry::new(vec![
        destination("amsterdam", "Amsterdam"),
        destination("geneva", "Geneva"),
        destination("chamonix", "Chamonix"),
    ])
}

/// Taxi has two offers, Flight one, every other type none
pub fn fixture_offers() -> InMemoryOfferCatalog {
    InMemoryOfferCatalog::new(vec![
        OfferGroup {
            event_type: EventType::Taxi,
            offers: vec![
                offer("taxi-comfort", "Upgrade to comfort class", 40),
                offer("taxi-radio", "Choose the radio station", 5),
            ],
        },
        OfferGroup {
            event_type: EventType::Flight,
            offers: vec![offer("flight-meal", "Add meal", 15)],
        },
    ])
}

pub fn fixture_reference() -> ReferenceData {
    ReferenceData::new(Arc::new(fixture_destinations()), Arc::new(fixture_offers()))
}

// ===== RecordingTarget =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetCall {
    Attach(NodeId),
    Replace { new: NodeId, old: NodeId },
    Detach(NodeId),
    Update(NodeId),
    Shake(NodeId),
}

/// Render target that remembers every call and what is on screen
#[derive(Default)]
pub struct RecordingTarget {
    pub calls: Vec<TargetCall>,
    pub shown: HashMap<NodeId, Node>,
    /// `replace` calls whose old node was not shown
    pub orphan_replacements: usize,
    pub shaken: Vec<NodeId>,
}

impl RecordingTarget {
    pub fn is_shown(&self, node: NodeId) -> bool {
        self.shown.contains_key(&node)
    }

    /// Number of shown nodes bound to `id`
    pub fn shown_for(&self, id: &EventId) -> usize {
        self.shown.values().filter(|n| n.event_id() == id).count()
    }
}

impl RenderTarget for RecordingTarget {
    fn attach(&mut self, node: NodeRef<'_>, _container: ContainerId) {
        self.calls.push(TargetCall::Attach(node.id()));
        self.shown.insert(node.id(), node.to_node());
    }

    fn replace(&mut self, new_node: NodeRef<'_>, old_node: NodeId) {
        self.calls.push(TargetCall::Replace {
            new: new_node.id(),
            old: old_node,
        });
        if self.shown.remove(&old_node).is_none() {
            self.orphan_replacements += 1;
        }
        self.shown.insert(new_node.id(), new_node.to_node());
    }

    fn detach(&mut self, node: NodeId) {
        self.calls.push(TargetCall::Detach(node));
        self.shown.remove(&node);
    }

    fn update(&mut self, node: NodeRef<'_>) {
        self.calls.push(TargetCall::Update(node.id()));
        if let Some(slot) = self.shown.get_mut(&node.id()) {
            *slot = node.to_node();
        }
    }

    fn shake(&mut self, node: NodeId) {
        self.calls.push(TargetCall::Shake(node));
        self.shaken.push(node);
    }
}

// ===== MockDataStore =====

pub struct MockDataStore {
    inner: InMemoryDataStore,
    /// If Some, every submit is rejected with this reason
    reject: RwLock<Option<String>>,
    submissions: RwLock<Vec<(UserAction, EventId, UpdateScope)>>,
}

impl MockDataStore {
    pub fn new(events: Vec<TripEvent>) -> Self {
        Self {
            inner: InMemoryDataStore::new(events),
            reject: RwLock::new(None),
            submissions: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_reject(&self, reason: Option<String>) {
        *self.reject.write().await = reason;
    }

    pub async fn submissions(&self) -> Vec<(UserAction, EventId, UpdateScope)> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl DataStore for MockDataStore {
    async fn load(&self) -> StoreResult<Vec<TripEvent>> {
        self.inner.load().await
    }

    async fn submit(
        &self,
        action: UserAction,
        event: &TripEvent,
        scope: UpdateScope,
    ) -> StoreResult<TripEvent> {
        self.submissions
            .write()
            .await
            .push((action, event.id.clone(), scope));
        if let Some(ref reason) = *self.reject.read().await {
            return Err(StoreError::Rejected {
                reason: reason.clone(),
            });
        }
        self.inner.submit(action, event, scope).await
    }
}

// ===== Factory methods =====

pub fn recording_env() -> PresenterEnv<RecordingTarget> {
    PresenterEnv::new(RecordingTarget::default(), fixture_reference())
}

/// Board over a recording target, initialized with `events`
pub fn board_with(events: Vec<TripEvent>) -> EventBoard<RecordingTarget> {
    let mut board = EventBoard::new(RecordingTarget::default(), fixture_reference());
    board.init(events);
    board
}
