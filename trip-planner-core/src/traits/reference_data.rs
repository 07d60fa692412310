//! Destination registry and offer catalog abstract Traits

use std::collections::HashMap;

use crate::types::{Destination, DestinationId, EventType, Offer, OfferGroup};

/// Destination lookup
pub trait DestinationRegistry: Send + Sync {
    /// Find a destination by identifier
    fn by_id(&self, id: &DestinationId) -> Option<&Destination>;

    /// Find a destination by display name (case-insensitive, surrounding
    /// whitespace ignored)
    fn by_name(&self, name: &str) -> Option<&Destination>;

    /// Every destination, in registry order
    fn all(&self) -> &[Destination];
}

/// Offer lookup
pub trait OfferCatalog: Send + Sync {
    /// Offers available for `event_type` (empty when none)
    fn offers_for(&self, event_type: EventType) -> &[Offer];
}

/// In-memory destination registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryDestinationRegistry {
    destinations: Vec<Destination>,
}

impl InMemoryDestinationRegistry {
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }
}

impl DestinationRegistry for InMemoryDestinationRegistry {
    fn by_id(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| &d.id == id)
    }

    fn by_name(&self, name: &str) -> Option<&Destination> {
        let name = name.trim();
        self.destinations
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    fn all(&self) -> &[Destination] {
        &self.destinations
    }
}

/// In-memory offer catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfferCatalog {
    groups: HashMap<EventType, Vec<Offer>>,
}

impl InMemoryOfferCatalog {
    #[must_use]
    pub fn new(groups: Vec<OfferGroup>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|g| (g.event_type, g.offers))
                .collect(),
        }
    }
}

impl OfferCatalog for InMemoryOfferCatalog {
    fn offers_for(&self, event_type: EventType) -> &[Offer] {
        self.groups.get(&event_type).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixture_destinations, fixture_offers};

    #[test]
    fn destination_lookup_by_name_ignores_case() {
        let registry = fixture_destinations();
        let found = registry.by_name("  geneva ").unwrap();
        assert_eq!(found.id.as_str(), "geneva");
        assert!(registry.by_name("Atlantis").is_none());
    }

    #[test]
    fn offers_for_unknown_type_is_empty() {
        let catalog = fixture_offers();
        assert_eq!(catalog.offers_for(EventType::Taxi).len(), 2);
        assert!(catalog.offers_for(EventType::Sightseeing).is_empty());
    }
}
