//! Trip Planner Core Library
//!
//! Presentation core of a trip planner event list:
//! - Per-event presenters switching between a view row and an edit form
//! - An event board enforcing a single open form and applying store results
//! - Refresh scope classification of submitted edits
//!
//! Rendering, storage and reference data are injected through traits, so the
//! same core drives the terminal front-end and the unit tests.

pub mod error;
pub mod presenter;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, StoreError, StoreResult};
pub use presenter::{EventBoard, EventPresenter, ReferenceData};
pub use traits::{DataStore, DestinationRegistry, OfferCatalog, RenderTarget};
