//! Trigger registry.
//!
//! Triggers register on mount and unregister on unmount, so the id -> anchor
//! mapping lives exactly as long as the trigger component does.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{CoreResult, GearError};
use crate::port::Anchor;
use crate::types::{OwnerId, Rect};

#[derive(Default)]
pub struct TriggerRegistry {
    anchors: HashMap<OwnerId, Rc<dyn Anchor>>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the anchor for `id`.
    pub fn register(&mut self, id: OwnerId, anchor: Rc<dyn Anchor>) {
        if self.anchors.insert(id.clone(), anchor).is_some() {
            tracing::trace!(owner = %id, "Replaced trigger anchor");
        }
    }

    /// Remove the anchor for `id`, returning whether one was registered.
    pub fn unregister(&mut self, id: &OwnerId) -> bool {
        self.anchors.remove(id).is_some()
    }

    pub fn get(&self, id: &OwnerId) -> Option<&Rc<dyn Anchor>> {
        self.anchors.get(id)
    }

    pub fn contains(&self, id: &OwnerId) -> bool {
        self.anchors.contains_key(id)
    }

    /// DOM id of the trigger element registered for `id`.
    pub fn element_id(&self, id: &OwnerId) -> Option<&str> {
        self.anchors.get(id).map(|anchor| anchor.element_id())
    }

    /// Read the live rect of `id`'s trigger.
    pub fn measure(&self, id: &OwnerId) -> CoreResult<Rect> {
        self.anchors
            .get(id)
            .and_then(|anchor| anchor.bounding_rect())
            .ok_or_else(|| GearError::GeometryUnavailable(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

impl std::fmt::Debug for TriggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerRegistry")
            .field("triggers", &self.anchors.keys().collect::<Vec<_>>())
            .finish()
    }
}
