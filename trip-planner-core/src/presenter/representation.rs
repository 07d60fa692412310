//! View and edit representations of one event

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::traits::{DestinationRegistry, OfferCatalog};
use crate::types::{DestinationId, EventId, EventType, Offer, OfferId, TripEvent};

/// Identity of one constructed representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of the list container presenters attach into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(Uuid);

impl ContainerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination and offer lookups shared by every presenter of a list
#[derive(Clone)]
pub struct ReferenceData {
    pub destinations: Arc<dyn DestinationRegistry>,
    pub offers: Arc<dyn OfferCatalog>,
}

impl ReferenceData {
    #[must_use]
    pub fn new(destinations: Arc<dyn DestinationRegistry>, offers: Arc<dyn OfferCatalog>) -> Self {
        Self {
            destinations,
            offers,
        }
    }

    /// Offers of `event`'s type that `event` has selected
    #[must_use]
    pub fn selected_offers(&self, event: &TripEvent) -> Vec<Offer> {
        self.offers
            .offers_for(event.event_type)
            .iter()
            .filter(|o| event.offers.contains(&o.id))
            .cloned()
            .collect()
    }

    /// Display name of `id`, empty when unknown
    #[must_use]
    pub fn destination_name(&self, id: &DestinationId) -> String {
        self.destinations
            .by_id(id)
            .map(|d| d.name.clone())
            .unwrap_or_default()
    }
}

/// Progress of an open edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditStatus {
    /// Interactive
    Idle,
    /// Update request in flight
    Saving,
    /// Delete request in flight
    Deleting,
    /// Rejected request; shake animation playing
    Aborting,
}

impl EditStatus {
    /// Form inputs are locked
    #[must_use]
    pub fn is_disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Presenter mode
///
/// The edit status only exists inside `Edit`, so a `View` presenter can
/// never be "saving".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "status", rename_all = "camelCase")]
pub enum Mode {
    View,
    Edit(EditStatus),
}

impl Mode {
    #[must_use]
    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// Collapsed list row
#[derive(Debug, Clone, PartialEq)]
pub struct PointView {
    node: NodeId,
    pub event: TripEvent,
    pub destination_name: String,
    pub offers: Vec<Offer>,
}

impl PointView {
    #[must_use]
    pub fn build(event: &TripEvent, reference: &ReferenceData) -> Self {
        Self {
            node: NodeId::new(),
            event: event.clone(),
            destination_name: reference.destination_name(&event.destination),
            offers: reference.selected_offers(event),
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.event.duration()
    }
}

/// Expanded edit form
///
/// Holds a draft copy of the event; the bound record is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct PointForm {
    node: NodeId,
    original: TripEvent,
    draft: TripEvent,
}

impl PointForm {
    #[must_use]
    pub fn build(event: &TripEvent) -> Self {
        Self {
            node: NodeId::new(),
            original: event.clone(),
            draft: event.clone(),
        }
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Values the form was opened with
    #[must_use]
    pub fn original(&self) -> &TripEvent {
        &self.original
    }

    /// Values currently entered
    #[must_use]
    pub fn draft(&self) -> &TripEvent {
        &self.draft
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Drop unsaved input
    pub fn reset(&mut self) {
        self.draft = self.original.clone();
    }

    /// Change the event type; selected offers belong to the old type and are cleared
    pub fn set_type(&mut self, event_type: EventType) {
        if self.draft.event_type != event_type {
            self.draft.event_type = event_type;
            self.draft.offers.clear();
        }
    }

    pub fn set_destination(&mut self, id: DestinationId) {
        self.draft.destination = id;
    }

    /// Pick the destination whose display name is `name`
    pub fn set_destination_by_name(
        &mut self,
        name: &str,
        destinations: &dyn DestinationRegistry,
    ) -> CoreResult<()> {
        let destination = destinations
            .by_name(name)
            .ok_or_else(|| CoreError::DestinationNotFound(name.to_string()))?;
        self.draft.destination = destination.id.clone();
        Ok(())
    }

    pub fn set_dates(&mut self, from: DateTime<Utc>, to: DateTime<Utc>) {
        self.draft.date_from = from;
        self.draft.date_to = to;
    }

    pub fn shift_start(&mut self, delta: TimeDelta) {
        self.draft.date_from += delta;
    }

    pub fn shift_end(&mut self, delta: TimeDelta) {
        self.draft.date_to += delta;
    }

    pub fn set_price(&mut self, price: u32) {
        self.draft.base_price = price;
    }

    /// Select or unselect an offer of the draft's type
    pub fn toggle_offer(&mut self, id: &OfferId, offers: &dyn OfferCatalog) -> CoreResult<()> {
        if !offers
            .offers_for(self.draft.event_type)
            .iter()
            .any(|o| &o.id == id)
        {
            return Err(CoreError::Validation(format!(
                "offer {id} is not available for {}",
                self.draft.event_type
            )));
        }
        if !self.draft.offers.remove(id) {
            self.draft.offers.insert(id.clone());
        }
        Ok(())
    }

    /// Check the draft before submission
    pub fn validate(&self, reference: &ReferenceData) -> CoreResult<()> {
        if self.draft.date_to < self.draft.date_from {
            return Err(CoreError::Validation(
                "end time is earlier than start time".to_string(),
            ));
        }
        if reference.destinations.by_id(&self.draft.destination).is_none() {
            return Err(CoreError::DestinationNotFound(
                self.draft.destination.to_string(),
            ));
        }
        let available = reference.offers.offers_for(self.draft.event_type);
        if let Some(unknown) = self
            .draft
            .offers
            .iter()
            .find(|id| !available.iter().any(|o| &o.id == *id))
        {
            return Err(CoreError::Validation(format!(
                "offer {unknown} is not available for {}",
                self.draft.event_type
            )));
        }
        Ok(())
    }
}

/// Borrowed representation handed to a [`RenderTarget`](crate::traits::RenderTarget)
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    View(&'a PointView),
    Edit(&'a PointForm, EditStatus),
}

impl NodeRef<'_> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::View(view) => view.node(),
            Self::Edit(form, _) => form.node(),
        }
    }

    #[must_use]
    pub fn event_id(&self) -> &EventId {
        match self {
            Self::View(view) => &view.event.id,
            Self::Edit(form, _) => &form.original().id,
        }
    }

    /// Owned copy for targets that keep what they display
    #[must_use]
    pub fn to_node(&self) -> Node {
        match *self {
            Self::View(view) => Node::View(view.clone()),
            Self::Edit(form, status) => Node::Edit {
                form: form.clone(),
                status,
            },
        }
    }
}

/// Owned representation
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    View(PointView),
    Edit { form: PointForm, status: EditStatus },
}

impl Node {
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::View(view) => view.node(),
            Self::Edit { form, .. } => form.node(),
        }
    }

    #[must_use]
    pub fn event_id(&self) -> &EventId {
        match self {
            Self::View(view) => &view.event.id,
            Self::Edit { form, .. } => &form.original().id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, event, fixture_reference};

    #[test]
    fn type_change_clears_offers() {
        let mut e = event("e1", 20, at(1), at(2));
        e.offers.insert(OfferId::from("taxi-comfort"));
        let mut form = PointForm::build(&e);

        form.set_type(EventType::Taxi);
        assert_eq!(form.draft().offers.len(), 1);

        form.set_type(EventType::Bus);
        assert!(form.draft().offers.is_empty());
        assert_eq!(form.original().offers.len(), 1);
    }

    #[test]
    fn validation_rejects_inverted_dates() {
        let reference = fixture_reference();
        let mut form = PointForm::build(&event("e1", 20, at(1), at(2)));
        form.set_dates(at(5), at(4));
        assert!(matches!(
            form.validate(&reference),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn unknown_destination_name_is_rejected() {
        let reference = fixture_reference();
        let mut form = PointForm::build(&event("e1", 20, at(1), at(2)));
        let result = form.set_destination_by_name("Atlantis", reference.destinations.as_ref());
        assert!(matches!(result, Err(CoreError::DestinationNotFound(_))));
        assert!(!form.is_dirty());

        form.set_destination_by_name("Chamonix", reference.destinations.as_ref())
            .unwrap();
        assert_eq!(form.draft().destination.as_str(), "chamonix");
        assert!(form.validate(&reference).is_ok());
    }

    #[test]
    fn offers_must_belong_to_type() {
        let reference = fixture_reference();
        let mut form = PointForm::build(&event("e1", 20, at(1), at(2)));
        let offer = OfferId::from("taxi-comfort");

        form.toggle_offer(&offer, reference.offers.as_ref()).unwrap();
        assert!(form.draft().offers.contains(&offer));
        form.toggle_offer(&offer, reference.offers.as_ref()).unwrap();
        assert!(!form.draft().offers.contains(&offer));

        let foreign = OfferId::from("flight-meal");
        assert!(form.toggle_offer(&foreign, reference.offers.as_ref()).is_err());
    }

    #[test]
    fn reset_restores_original() {
        let mut form = PointForm::build(&event("e1", 20, at(1), at(2)));
        form.set_price(500);
        assert!(form.is_dirty());
        form.reset();
        assert!(!form.is_dirty());
        assert_eq!(form.draft().base_price, 20);
    }

    #[test]
    fn view_resolves_reference_data() {
        let reference = fixture_reference();
        let mut e = event("e1", 20, at(1), at(3));
        e.offers.insert(OfferId::from("taxi-radio"));
        let view = PointView::build(&e, &reference);
        assert_eq!(view.destination_name, "Amsterdam");
        assert_eq!(view.offers.len(), 1);
        assert_eq!(view.duration(), TimeDelta::hours(2));
    }
}
