//! Sort and filter selectors for the event list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TripEvent;

/// Active ordering of the event list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// By start date, earliest first
    #[default]
    Day,
    /// By duration, longest first
    Time,
    /// By base price, highest first
    Price,
}

impl SortType {
    pub const ALL: [Self; 3] = [Self::Day, Self::Time, Self::Price];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Time => "Time",
            Self::Price => "Price",
        }
    }

    /// Next sort in toolbar order (wraps around)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Day => Self::Time,
            Self::Time => Self::Price,
            Self::Price => Self::Day,
        }
    }
}

/// Active filter of the event list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Everything,
    Future,
    Present,
    Past,
}

impl FilterType {
    pub const ALL: [Self; 4] = [Self::Everything, Self::Future, Self::Present, Self::Past];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Everything => "Everything",
            Self::Future => "Future",
            Self::Present => "Present",
            Self::Past => "Past",
        }
    }

    /// Placeholder shown when the filtered list is empty
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Everything => "Click New Event to create your first point",
            Self::Future => "There are no future events now",
            Self::Present => "There are no present events now",
            Self::Past => "There are no past events now",
        }
    }

    /// Whether `event` belongs to this filter at `now`
    #[must_use]
    pub fn matches(self, event: &TripEvent, now: DateTime<Utc>) -> bool {
        match self {
            Self::Everything => true,
            Self::Future => event.is_future(now),
            Self::Present => event.is_present(now),
            Self::Past => event.is_past(now),
        }
    }

    /// Next filter in toolbar order (wraps around)
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Everything => Self::Future,
            Self::Future => Self::Present,
            Self::Present => Self::Past,
            Self::Past => Self::Everything,
        }
    }
}
