//! In-memory viewport for running the popover engine without a browser.
//!
//! Events are dispatched synchronously on the calling thread, the same way a
//! browser event loop hands one event to each listener in turn.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::port::{
    Anchor, EventHandler, ListenerKind, PointerTarget, Subscription, ViewportEvent, ViewportPort,
};
use crate::types::{Rect, Size};

struct HeadlessState {
    size: Size,
    next_id: u64,
    listeners: BTreeMap<u64, (ListenerKind, EventHandler)>,
}

/// Cheaply cloneable in-memory [`ViewportPort`].
#[derive(Clone)]
pub struct HeadlessViewport {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessViewport {
    pub fn new(size: Size) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                size,
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Change the viewport size and fire a resize event.
    pub fn resize(&self, size: Size) {
        self.state.borrow_mut().size = size;
        self.dispatch(ViewportEvent::Resized);
    }

    pub fn scroll(&self) {
        self.dispatch(ViewportEvent::Scrolled);
    }

    /// Pointer-down with the given element-id path, innermost first.
    pub fn pointer_down<I, S>(&self, path: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(ViewportEvent::PointerDown(PointerTarget::new(path)));
    }

    pub fn key_up(&self, key: &str) {
        self.dispatch(ViewportEvent::KeyUp {
            key: key.to_string(),
        });
    }

    /// Deliver `event` to every listener of its kind.
    ///
    /// A listener removed by an earlier handler in the same dispatch is skipped.
    pub fn dispatch(&self, event: ViewportEvent) {
        let kind = event.kind();
        let targets: Vec<(u64, EventHandler)> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, (k, _))| *k == kind)
            .map(|(id, (_, handler))| (*id, handler.clone()))
            .collect();

        for (id, handler) in targets {
            let live = self.state.borrow().listeners.contains_key(&id);
            if live {
                handler(&event);
            }
        }
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.state
            .borrow()
            .listeners
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ViewportPort for HeadlessViewport {
    fn viewport_size(&self) -> Size {
        self.state.borrow().size
    }

    fn subscribe(&self, kind: ListenerKind, handler: EventHandler) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.insert(id, (kind, handler));
            id
        };

        let weak: Weak<RefCell<HeadlessState>> = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.remove(&id);
            }
        })
    }
}

impl std::fmt::Debug for HeadlessViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("HeadlessViewport")
            .field("size", &state.size)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

/// Trigger with a settable rect.
#[derive(Debug)]
pub struct HeadlessAnchor {
    element_id: String,
    rect: Cell<Option<Rect>>,
}

impl HeadlessAnchor {
    pub fn new(element_id: impl Into<String>, rect: Option<Rect>) -> Self {
        Self {
            element_id: element_id.into(),
            rect: Cell::new(rect),
        }
    }

    pub fn set_rect(&self, rect: Option<Rect>) {
        self.rect.set(rect);
    }
}

impl Anchor for HeadlessAnchor {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.rect.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_matching_kind_only() {
        let port = HeadlessViewport::new(Size::new(800.0, 600.0));
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _sub = port.on_scroll(Rc::new(move |_| counter.set(counter.get() + 1)));

        port.scroll();
        port.resize(Size::new(100.0, 100.0));
        port.key_up("Escape");

        assert_eq!(hits.get(), 1);
        assert_eq!(port.viewport_size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn handler_removed_mid_dispatch_is_skipped() {
        let port = HeadlessViewport::new(Size::new(800.0, 600.0));
        let second: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let slot = second.clone();
        let _first = port.on_resize(Rc::new(move |_| {
            slot.borrow_mut().take();
        }));
        let counter = hits.clone();
        *second.borrow_mut() = Some(port.on_resize(Rc::new(move |_| counter.set(counter.get() + 1))));

        port.resize(Size::new(10.0, 10.0));
        assert_eq!(hits.get(), 0);
        assert_eq!(port.listener_count(ListenerKind::Resize), 1);
    }

    #[test]
    fn subscription_outliving_port_is_harmless() {
        let port = HeadlessViewport::new(Size::new(800.0, 600.0));
        let sub = port.on_key_up(Rc::new(|_| {}));
        drop(port);
        drop(sub);
    }

    #[test]
    fn anchor_rect_is_settable() {
        let anchor = HeadlessAnchor::new("trigger", None);
        assert_eq!(anchor.bounding_rect(), None);
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        anchor.set_rect(Some(rect));
        assert_eq!(anchor.bounding_rect(), Some(rect));
        assert_eq!(anchor.element_id(), "trigger");
    }
}
