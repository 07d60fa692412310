//! Refresh scope classification of a submitted edit

use crate::types::{SortType, TripEvent, UpdateScope};

/// Which compared fields differ between two versions of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChangedFields {
    event_type: bool,
    price: bool,
    start: bool,
    end: bool,
    destination: bool,
}

impl ChangedFields {
    fn between(old: &TripEvent, new: &TripEvent) -> Self {
        Self {
            event_type: old.event_type != new.event_type,
            price: old.base_price != new.base_price,
            start: old.date_from != new.date_from,
            end: old.date_to != new.date_to,
            destination: old.destination != new.destination,
        }
    }

    fn only_type(self) -> bool {
        self.event_type && !(self.price || self.start || self.end || self.destination)
    }

    fn touches_sort_key(self, sort: SortType) -> bool {
        match sort {
            SortType::Price => self.price,
            SortType::Time => self.start || self.end,
            SortType::Day => self.start,
        }
    }
}

/// Classify how much of the list an edit from `old` to `new` invalidates.
///
/// First match wins:
/// 1. only the type changed: `Patch`
/// 2. the active sort key's fields are unchanged: `Minor`
/// 3. otherwise: `Major`
///
/// Offers and the favorite flag are not compared; favorite toggles are
/// always `Patch` and never reach this function.
#[must_use]
pub fn classify(old: &TripEvent, new: &TripEvent, sort: SortType) -> UpdateScope {
    let changed = ChangedFields::between(old, new);

    let scope = if changed.only_type() {
        UpdateScope::Patch
    } else if changed.touches_sort_key(sort) {
        UpdateScope::Major
    } else {
        UpdateScope::Minor
    };

    log::debug!("Classified edit of {} under {sort:?} sort as {scope:?}", new.id);
    scope
}
