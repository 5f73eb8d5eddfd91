//! Visibility state machine.
//!
//! `Closed <-> Open(owner)`; activating the open owner toggles it off,
//! activating a different owner switches without an intermediate double-open.

use crate::types::OwnerId;

/// Outcome of [`VisibilityMachine::activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `Closed -> Open(id)`
    Opened(OwnerId),
    /// `Open(from) -> Open(to)`, `from != to`
    Switched { from: OwnerId, to: OwnerId },
    /// `Open(id) -> Closed` via re-activation of the same owner
    Closed(OwnerId),
}

/// Tracks which trigger, if any, owns the open popover.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMachine {
    active: Option<OwnerId>,
}

impl VisibilityMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle or switch ownership.
    pub fn activate(&mut self, id: OwnerId) -> Transition {
        match self.active.take() {
            None => {
                self.active = Some(id.clone());
                Transition::Opened(id)
            }
            Some(current) if current == id => Transition::Closed(current),
            Some(current) => {
                self.active = Some(id.clone());
                Transition::Switched {
                    from: current,
                    to: id,
                }
            }
        }
    }

    /// Force `Closed`, returning the owner that was open.
    pub fn close(&mut self) -> Option<OwnerId> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&OwnerId> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_open_for(&self, id: &OwnerId) -> bool {
        self.active.as_ref() == Some(id)
    }
}
