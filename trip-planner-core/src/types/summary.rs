//! Trip header summary

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::TripEvent;
use crate::traits::{DestinationRegistry, OfferCatalog};

/// Number of route stops shown before the middle collapses to an ellipsis
const MAX_ROUTE_STOPS: usize = 3;

/// Route, dates and total cost of the whole trip (unfiltered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub route: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub total_cost: u64,
}

impl TripSummary {
    /// Summarize `events`; `None` for an empty trip.
    ///
    /// Total cost counts the base price plus every selected offer that the
    /// catalog still knows for the event's type.
    pub fn from_events(
        events: &[TripEvent],
        destinations: &dyn DestinationRegistry,
        offers: &dyn OfferCatalog,
    ) -> Option<Self> {
        let mut ordered: Vec<&TripEvent> = events.iter().collect();
        ordered.sort_by_key(|e| e.date_from);

        let first = ordered.first()?;
        let date_to = ordered.iter().map(|e| e.date_to).max()?;

        let names: Vec<&str> = ordered
            .iter()
            .map(|e| {
                destinations
                    .by_id(&e.destination)
                    .map_or("?", |d| d.name.as_str())
            })
            .collect();

        let route = if names.len() > MAX_ROUTE_STOPS {
            format!("{} — ... — {}", names[0], names[names.len() - 1])
        } else {
            names.join(" — ")
        };

        let total_cost = ordered
            .iter()
            .map(|e| {
                let extras: u64 = offers
                    .offers_for(e.event_type)
                    .iter()
                    .filter(|o| e.offers.contains(&o.id))
                    .map(|o| u64::from(o.price))
                    .sum();
                u64::from(e.base_price) + extras
            })
            .sum();

        Some(Self {
            route,
            date_from: first.date_from,
            date_to,
            total_cost,
        })
    }
}
