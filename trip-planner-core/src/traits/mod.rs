//! Collaborator abstraction trait definition

mod data_store;
mod reference_data;
mod render_target;

pub use data_store::{DataStore, InMemoryDataStore};
pub use reference_data::{
    DestinationRegistry, InMemoryDestinationRegistry, InMemoryOfferCatalog, OfferCatalog,
};
pub use render_target::RenderTarget;
