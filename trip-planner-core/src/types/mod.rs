//! Type definitions

mod change;
mod destination;
mod event;
mod listing;
mod summary;

pub use change::{ChangeSource, PendingChange, UpdateScope, UserAction};
pub use destination::{Destination, Offer, OfferGroup, Picture};
pub use event::{DestinationId, EventId, EventType, OfferId, TripEvent};
pub use listing::{FilterType, SortType};
pub use summary::TripSummary;
