//! Event list orchestration

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::event_presenter::{EventPresenter, PresenterEnv};
use super::representation::{PointForm, ReferenceData};
use crate::error::{CoreError, CoreResult, StoreResult};
use crate::traits::{DataStore, RenderTarget};
use crate::types::{
    ChangeSource, EventId, FilterType, PendingChange, SortType, TripEvent, TripSummary,
    UpdateScope, UserAction,
};
use crate::utils::filter::{available_filters, filter_events};
use crate::utils::sort::{compare, sort_events};

/// Clock used for time-based filters
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Owner of the event collection and of one presenter per visible event
///
/// Every mode change and every store result goes through the board, which
/// keeps at most one presenter in edit mode at a time.
pub struct EventBoard<T: RenderTarget> {
    env: PresenterEnv<T>,
    events: Vec<TripEvent>,
    presenters: Vec<EventPresenter>,
    /// Events with a store request awaiting its result
    in_flight: HashSet<EventId>,
    sort: SortType,
    filter: FilterType,
    clock: Clock,
}

impl<T: RenderTarget> EventBoard<T> {
    #[must_use]
    pub fn new(target: T, reference: ReferenceData) -> Self {
        Self {
            env: PresenterEnv::new(target, reference),
            events: Vec::new(),
            presenters: Vec::new(),
            in_flight: HashSet::new(),
            sort: SortType::default(),
            filter: FilterType::default(),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the clock (tests pin "now")
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Start from a sort other than the default
    #[must_use]
    pub fn with_sort(mut self, sort: SortType) -> Self {
        self.sort = sort;
        self
    }

    /// Take a new collection and rebuild every presenter
    pub fn init(&mut self, events: Vec<TripEvent>) {
        self.events = events;
        self.rebuild();
        log::info!(
            "Board initialized with {} events ({} visible)",
            self.events.len(),
            self.presenters.len()
        );
    }

    /// Load the collection from `store`
    pub async fn load<S: DataStore + ?Sized>(&mut self, store: &S) -> CoreResult<()> {
        let events = store.load().await?;
        self.init(events);
        Ok(())
    }

    /// Destroy every presenter
    pub fn clear(&mut self) {
        for presenter in self.presenters.drain(..) {
            presenter.destroy(&mut self.env);
        }
    }

    fn rebuild(&mut self) {
        self.clear();

        let mut visible = filter_events(&self.events, self.filter, (self.clock)());
        sort_events(&mut visible, self.sort);

        for event in visible {
            let presenter = EventPresenter::mount(event, &mut self.env);
            self.presenters.push(presenter);
        }
    }

    pub fn set_sort(&mut self, sort: SortType) {
        if self.sort == sort {
            return;
        }
        self.sort = sort;
        self.rebuild();
    }

    /// Switch filter; the sort goes back to its default
    pub fn set_filter(&mut self, filter: FilterType) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        self.sort = SortType::default();
        self.rebuild();
    }

    fn index_of(&self, id: &EventId) -> CoreResult<usize> {
        self.presenters
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| CoreError::EventNotFound(id.clone()))
    }

    /// Open `id`'s form and force every other presenter back to view
    pub fn switch_to_edit(&mut self, id: &EventId) -> CoreResult<()> {
        let index = self.index_of(id)?;
        if !self.presenters[index].switch_to_edit(&mut self.env) {
            return Ok(());
        }

        for (i, sibling) in self.presenters.iter_mut().enumerate() {
            if i != index {
                sibling.reset_view(&mut self.env);
            }
        }
        Ok(())
    }

    /// Close `id`'s form without saving
    pub fn reset_view(&mut self, id: &EventId) -> CoreResult<()> {
        let index = self.index_of(id)?;
        self.presenters[index].reset_view(&mut self.env);
        Ok(())
    }

    /// Deliver the cancellation signal to its owner.
    ///
    /// Returns whether a form was closed.
    pub fn cancel(&mut self) -> bool {
        let Some(owner) = self.env.cancellation.take() else {
            return false;
        };

        match self.presenters.iter_mut().find(|p| p.id() == &owner) {
            Some(presenter) => {
                presenter.reset_view(&mut self.env);
                true
            }
            None => {
                log::warn!("Cancellation owner {owner} no longer has a presenter");
                false
            }
        }
    }

    /// Edit the draft of `id`'s open form
    pub fn edit_form<R, F>(&mut self, id: &EventId, edit: F) -> CoreResult<R>
    where
        F: FnOnce(&mut PointForm, &ReferenceData) -> CoreResult<R>,
    {
        let index = self.index_of(id)?;
        self.presenters[index].edit_form(&mut self.env, edit)
    }

    /// Shake animation on `id` completed
    pub fn finish_aborting(&mut self, id: &EventId) {
        if let Some(presenter) = self.presenters.iter_mut().find(|p| p.id() == id) {
            presenter.finish_aborting(&mut self.env);
        }
    }

    /// One request per event; a second one would be built on a stale value
    fn ensure_not_in_flight(&self, id: &EventId) -> CoreResult<()> {
        if self.in_flight.contains(id) {
            return Err(CoreError::InvalidState(format!(
                "event {id} already has a request in flight"
            )));
        }
        Ok(())
    }

    /// Validate and classify `id`'s form, then lock it while saving.
    ///
    /// A validation failure leaves the form open and interactive.
    pub fn begin_submit(&mut self, id: &EventId) -> CoreResult<PendingChange> {
        self.ensure_not_in_flight(id)?;
        let index = self.index_of(id)?;
        let presenter = &mut self.presenters[index];
        let change = presenter.prepare_submit(&self.env.reference, self.sort)?;
        presenter.set_saving(&mut self.env);
        self.in_flight.insert(id.clone());
        Ok(change)
    }

    pub fn begin_delete(&mut self, id: &EventId) -> CoreResult<PendingChange> {
        self.ensure_not_in_flight(id)?;
        let index = self.index_of(id)?;
        let presenter = &mut self.presenters[index];
        let change = presenter.prepare_delete()?;
        presenter.set_deleting(&mut self.env);
        self.in_flight.insert(id.clone());
        Ok(change)
    }

    pub fn begin_toggle_favorite(&mut self, id: &EventId) -> CoreResult<PendingChange> {
        self.ensure_not_in_flight(id)?;
        let index = self.index_of(id)?;
        let change = self.presenters[index].prepare_favorite_toggle()?;
        self.in_flight.insert(id.clone());
        Ok(change)
    }

    /// Whether `id` is waiting for a store result
    #[must_use]
    pub fn is_in_flight(&self, id: &EventId) -> bool {
        self.in_flight.contains(id)
    }

    /// Apply a store result for `change`.
    ///
    /// Returns the scope that was actually applied, which is `Major` when a
    /// minor update moved the event out of the active filter. A rejection
    /// shakes the originating presenter and leaves the collection untouched.
    pub fn complete(
        &mut self,
        change: PendingChange,
        outcome: StoreResult<TripEvent>,
    ) -> CoreResult<UpdateScope> {
        self.in_flight.remove(&change.origin);
        let applied = match outcome {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("Store rejected {:?} of {}: {e}", change.action, change.origin);
                match self.presenters.iter_mut().find(|p| p.id() == &change.origin) {
                    Some(presenter) => presenter.set_aborting(&mut self.env),
                    None => log::warn!("Rejection for {} arrived after rebuild", change.origin),
                }
                return Err(e.into());
            }
        };

        if change.action == UserAction::Delete {
            self.events.retain(|e| e.id != change.origin);
            self.rebuild();
            log::info!("Deleted event {}", change.origin);
            return Ok(UpdateScope::Major);
        }

        match self.events.iter_mut().find(|e| e.id == applied.id) {
            Some(slot) => *slot = applied.clone(),
            None => {
                log::warn!("Store applied {} which is not in the collection", applied.id);
                return Err(CoreError::EventNotFound(applied.id));
            }
        }

        let scope = self.apply_update(&change, applied);
        log::info!("Applied {scope:?} update of {}", change.origin);
        Ok(scope)
    }

    fn apply_update(&mut self, change: &PendingChange, applied: TripEvent) -> UpdateScope {
        if change.scope == UpdateScope::Major {
            self.rebuild();
            return UpdateScope::Major;
        }

        let Some(index) = self.presenters.iter().position(|p| p.id() == &applied.id) else {
            log::warn!(
                "Result for {} arrived after its presenter was destroyed",
                applied.id
            );
            return change.scope;
        };

        if change.scope == UpdateScope::Minor && !self.filter.matches(&applied, (self.clock)()) {
            self.rebuild();
            return UpdateScope::Major;
        }

        self.presenters[index].init(applied, &mut self.env);

        if change.scope == UpdateScope::Minor {
            self.resort();
        }

        if change.source == ChangeSource::Form {
            if let Some(presenter) = self.presenters.iter_mut().find(|p| p.id() == &change.origin)
            {
                presenter.reset_view(&mut self.env);
            }
        }
        change.scope
    }

    /// Stable re-sort of the existing presenters; only moved ones are re-bound
    fn resort(&mut self) {
        let before: Vec<EventId> = self.presenters.iter().map(|p| p.id().clone()).collect();
        let sort = self.sort;
        self.presenters
            .sort_by(|a, b| compare(a.event(), b.event(), sort));

        for (index, presenter) in self.presenters.iter_mut().enumerate() {
            if presenter.id() != &before[index] {
                let event = presenter.event().clone();
                presenter.init(event, &mut self.env);
            }
        }
    }

    /// Send `change` to `store` and apply the result
    pub async fn dispatch<S: DataStore + ?Sized>(
        &mut self,
        store: &S,
        change: PendingChange,
    ) -> CoreResult<UpdateScope> {
        let outcome = store.submit(change.action, &change.event, change.scope).await;
        self.complete(change, outcome)
    }

    /// Presenters in display order
    #[must_use]
    pub fn presenters(&self) -> &[EventPresenter] {
        &self.presenters
    }

    #[must_use]
    pub fn presenter(&self, id: &EventId) -> Option<&EventPresenter> {
        self.presenters.iter().find(|p| p.id() == id)
    }

    /// Full collection, unfiltered
    #[must_use]
    pub fn events(&self) -> &[TripEvent] {
        &self.events
    }

    #[must_use]
    pub fn sort(&self) -> SortType {
        self.sort
    }

    #[must_use]
    pub fn filter(&self) -> FilterType {
        self.filter
    }

    /// Presenter currently in edit mode
    #[must_use]
    pub fn editing(&self) -> Option<&EventPresenter> {
        self.presenters.iter().find(|p| p.mode().is_edit())
    }

    #[must_use]
    pub fn editing_count(&self) -> usize {
        self.presenters.iter().filter(|p| p.mode().is_edit()).count()
    }

    #[must_use]
    pub fn cancellation_owner(&self) -> Option<&EventId> {
        self.env.cancellation.owner()
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.env.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.env.target
    }

    #[must_use]
    pub fn reference(&self) -> &ReferenceData {
        &self.env.reference
    }

    #[must_use]
    pub fn summary(&self) -> Option<TripSummary> {
        TripSummary::from_events(
            &self.events,
            self.env.reference.destinations.as_ref(),
            self.env.reference.offers.as_ref(),
        )
    }

    /// Each filter paired with whether any event matches it now
    #[must_use]
    pub fn available_filters(&self) -> Vec<(FilterType, bool)> {
        available_filters(&self.events, (self.clock)())
    }

    /// Placeholder text when nothing passes the active filter
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.presenters
            .is_empty()
            .then(|| self.filter.empty_message())
    }
}
