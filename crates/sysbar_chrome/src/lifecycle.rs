//! Lifecycle integration
//!
//! The styling layer attaches one observer per owner and forwards that
//! owner's lifecycle transitions here. Destruction tears the owner's cached
//! state down so a reused slot never sees stale entries.

use crate::session::{ChromeSession, OwnerId};

/// Owner lifecycle transitions the registry cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Owner came up.
    Create,
    /// Owner is going away.
    Destroy,
}

impl ChromeSession {
    /// Record an observer registration, at most once per owner.
    ///
    /// Returns `true` the first time and `false` (doing nothing) on
    /// repeats; callers gate the actual platform registration on the
    /// result.
    pub fn attach_observer(&mut self, owner: OwnerId) -> bool {
        if self.observer_attached(owner) {
            return false;
        }
        self.mark_observer_attached(owner);
        true
    }

    /// Forward a lifecycle event for `owner`.
    pub fn on_lifecycle_event(&mut self, owner: OwnerId, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Create => {
                // Setup ordering belongs to the styling layer.
                tracing::trace!(owner = ?owner, "owner created");
            }
            LifecycleEvent::Destroy => {
                self.remove_all_data(owner);
            }
        }
    }
}
