//! Event list comparators

use std::cmp::Ordering;

use crate::types::{SortType, TripEvent};

/// Compare two events under `sort`
#[must_use]
pub fn compare(a: &TripEvent, b: &TripEvent, sort: SortType) -> Ordering {
    match sort {
        SortType::Day => a.date_from.cmp(&b.date_from),
        SortType::Time => b.duration().cmp(&a.duration()),
        SortType::Price => b.base_price.cmp(&a.base_price),
    }
}

/// Stable in-place sort; equal keys keep collection order
pub fn sort_events(events: &mut [TripEvent], sort: SortType) {
    events.sort_by(|a, b| compare(a, b, sort));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, event};

    fn ids(events: &[TripEvent]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn day_is_earliest_first() {
        let mut events = vec![
            event("late", 10, at(20), at(21)),
            event("early", 10, at(1), at(2)),
        ];
        sort_events(&mut events, SortType::Day);
        assert_eq!(ids(&events), ["early", "late"]);
    }

    #[test]
    fn time_is_longest_first() {
        let mut events = vec![
            event("short", 10, at(1), at(2)),
            event("long", 10, at(3), at(9)),
        ];
        sort_events(&mut events, SortType::Time);
        assert_eq!(ids(&events), ["long", "short"]);
    }

    #[test]
    fn price_is_highest_first_and_stable() {
        let mut events = vec![
            event("a", 10, at(1), at(2)),
            event("b", 50, at(3), at(4)),
            event("c", 10, at(5), at(6)),
        ];
        sort_events(&mut events, SortType::Price);
        assert_eq!(ids(&events), ["b", "a", "c"]);
    }
}
