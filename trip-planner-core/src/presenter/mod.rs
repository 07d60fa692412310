//! Event presenters and the board that coordinates them

mod board;
mod cancellation;
mod classifier;
mod event_presenter;
mod representation;

pub use board::{Clock, EventBoard};
pub use cancellation::CancellationController;
pub use classifier::classify;
pub use event_presenter::{EventPresenter, PresenterEnv};
pub use representation::{
    ContainerId, EditStatus, Mode, Node, NodeId, NodeRef, PointForm, PointView, ReferenceData,
};
