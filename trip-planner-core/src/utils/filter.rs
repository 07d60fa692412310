//! Event list filtering

use chrono::{DateTime, Utc};

use crate::types::{FilterType, TripEvent};

/// Events passing `filter` at `now`, in collection order
#[must_use]
pub fn filter_events(events: &[TripEvent], filter: FilterType, now: DateTime<Utc>) -> Vec<TripEvent> {
    events
        .iter()
        .filter(|e| filter.matches(e, now))
        .cloned()
        .collect()
}

/// Every filter paired with whether it would show at least one event
#[must_use]
pub fn available_filters(events: &[TripEvent], now: DateTime<Utc>) -> Vec<(FilterType, bool)> {
    FilterType::ALL
        .iter()
        .map(|f| (*f, events.iter().any(|e| f.matches(e, now))))
        .collect()
}
