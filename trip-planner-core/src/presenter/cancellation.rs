//! Escape-key ownership

use crate::types::EventId;

/// Which presenter, if any, a cancellation signal reverts
///
/// Holds the owner by id only; a destroyed presenter unregisters itself, and
/// a stale id simply finds no presenter.
#[derive(Debug, Default)]
pub struct CancellationController {
    owner: Option<EventId>,
}

impl CancellationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the signal to `id`, replacing any previous owner
    pub fn register(&mut self, id: EventId) {
        if let Some(previous) = self.owner.replace(id) {
            log::debug!("Cancellation ownership moved away from {previous}");
        }
    }

    /// Release the signal if `id` currently owns it
    pub fn unregister(&mut self, id: &EventId) -> bool {
        if self.owner.as_ref() == Some(id) {
            self.owner = None;
            true
        } else {
            false
        }
    }

    /// Consume the registration for a received signal
    pub fn take(&mut self) -> Option<EventId> {
        self.owner.take()
    }

    #[must_use]
    pub fn owner(&self) -> Option<&EventId> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.owner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_replaces_previous_owner() {
        let mut controller = CancellationController::new();
        controller.register(EventId::from("a"));
        controller.register(EventId::from("b"));
        assert_eq!(controller.owner().map(EventId::as_str), Some("b"));
    }

    #[test]
    fn unregister_ignores_non_owner() {
        let mut controller = CancellationController::new();
        controller.register(EventId::from("a"));
        assert!(!controller.unregister(&EventId::from("b")));
        assert!(controller.is_active());
        assert!(controller.unregister(&EventId::from("a")));
        assert!(!controller.is_active());
    }

    #[test]
    fn take_clears_registration() {
        let mut controller = CancellationController::new();
        controller.register(EventId::from("a"));
        assert_eq!(controller.take(), Some(EventId::from("a")));
        assert_eq!(controller.take(), None);
    }
}
