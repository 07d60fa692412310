//! Trip event record type definitions

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Trip event identifier (immutable, unique within a list)
    EventId
);
string_id!(
    /// Destination identifier
    DestinationId
);
string_id!(
    /// Offer identifier, unique within its event type
    OfferId
);

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventType {
    /// All event types, in menu order
    pub const ALL: [Self; 9] = [
        Self::Taxi,
        Self::Bus,
        Self::Train,
        Self::Ship,
        Self::Drive,
        Self::Flight,
        Self::CheckIn,
        Self::Sightseeing,
        Self::Restaurant,
    ];

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Ship => "Ship",
            Self::Drive => "Drive",
            Self::Flight => "Flight",
            Self::CheckIn => "Check-in",
            Self::Sightseeing => "Sightseeing",
            Self::Restaurant => "Restaurant",
        }
    }

    /// Next type in menu order (wraps around)
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous type in menu order (wraps around)
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One trip event
///
/// Treated as a value: edits build a new `TripEvent` instead of mutating a
/// shared one, so the previous value stays available for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEvent {
    pub id: EventId,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub destination: DestinationId,
    #[serde(with = "crate::utils::datetime")]
    pub date_from: DateTime<Utc>,
    #[serde(with = "crate::utils::datetime")]
    pub date_to: DateTime<Utc>,
    pub base_price: u32,
    #[serde(default)]
    pub offers: BTreeSet<OfferId>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl TripEvent {
    /// Time between start and end
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.date_to - self.date_from
    }

    /// Copy with the favorite flag flipped
    #[must_use]
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }

    /// Starts after `now`
    #[must_use]
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.date_from > now
    }

    /// Running at `now`
    #[must_use]
    pub fn is_present(&self, now: DateTime<Utc>) -> bool {
        self.date_from <= now && self.date_to >= now
    }

    /// Ended before `now`
    #[must_use]
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.date_to < now
    }
}
