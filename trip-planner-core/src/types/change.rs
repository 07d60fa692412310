//! Change propagation type definitions

use serde::{Deserialize, Serialize};

use super::{EventId, TripEvent};

/// Store action requested by a presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserAction {
    Update,
    Delete,
}

/// How much of the displayed list an applied change invalidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateScope {
    /// Only the changed item is re-rendered
    Patch,
    /// Content changed, position under the active sort cannot have changed
    Minor,
    /// Ordering input changed; the whole list is rebuilt
    Major,
}

/// What produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeSource {
    /// Edit form submission
    Form,
    /// Delete button of the edit form
    Delete,
    /// Favorite star of the view row
    Favorite,
}

/// A change waiting for the store's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingChange {
    /// Presenter that emitted the change
    pub origin: EventId,
    pub action: UserAction,
    /// Updated record, or the record to delete
    pub event: TripEvent,
    pub scope: UpdateScope,
    pub source: ChangeSource,
}
