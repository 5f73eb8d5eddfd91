//! Host environment abstraction.
//!
//! The engine never touches `window`/`document` directly. A [`ViewportPort`]
//! reports the viewport size and delivers the four global event kinds the
//! popover cares about; an [`Anchor`] reports a trigger's live bounding rect.
//! The DOM bridge in `gearhire-ui` and [`crate::headless::HeadlessViewport`]
//! are the two implementations.

use std::rc::Rc;

use crate::types::{Rect, Size};

/// Global listener kinds attached while a popover is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    /// Window resize
    Resize,
    /// Scroll anywhere in the document (capture phase)
    Scroll,
    /// Document pointer-down
    PointerDown,
    /// Document key-up
    KeyUp,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::Resize,
        ListenerKind::Scroll,
        ListenerKind::PointerDown,
        ListenerKind::KeyUp,
    ];

    /// DOM event name.
    pub fn event_name(&self) -> &'static str {
        match self {
            ListenerKind::Resize => "resize",
            ListenerKind::Scroll => "scroll",
            ListenerKind::PointerDown => "pointerdown",
            ListenerKind::KeyUp => "keyup",
        }
    }
}

/// Element ids along the event path, innermost first.
///
/// Elements without an id are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointerTarget {
    pub path: Vec<String>,
}

impl PointerTarget {
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the element with `element_id` is the target or one of its ancestors.
    pub fn is_within(&self, element_id: &str) -> bool {
        self.path.iter().any(|id| id == element_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportEvent {
    Resized,
    Scrolled,
    PointerDown(PointerTarget),
    KeyUp { key: String },
}

impl ViewportEvent {
    pub fn kind(&self) -> ListenerKind {
        match self {
            ViewportEvent::Resized => ListenerKind::Resize,
            ViewportEvent::Scrolled => ListenerKind::Scroll,
            ViewportEvent::PointerDown(_) => ListenerKind::PointerDown,
            ViewportEvent::KeyUp { .. } => ListenerKind::KeyUp,
        }
    }
}

/// Callback invoked for each delivered event.
pub type EventHandler = Rc<dyn Fn(&ViewportEvent)>;

/// Handle to a registered listener; unsubscribes when dropped.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Subscription that owns no listener.
    pub fn noop() -> Self {
        Self { unsubscribe: None }
    }

    /// Detach now. Same as dropping.
    pub fn cancel(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Viewport and global event source.
pub trait ViewportPort {
    /// Current size of the browsing viewport.
    fn viewport_size(&self) -> Size;

    /// Register `handler` for events of `kind`.
    ///
    /// Implementations must not invoke `handler` from inside this call and
    /// must stop delivering events once the returned subscription is dropped.
    fn subscribe(&self, kind: ListenerKind, handler: EventHandler) -> Subscription;

    fn on_resize(&self, handler: EventHandler) -> Subscription {
        self.subscribe(ListenerKind::Resize, handler)
    }

    /// Scroll listener registered in the capture phase, so scrolling inside
    /// any ancestor container is observed.
    fn on_scroll(&self, handler: EventHandler) -> Subscription {
        self.subscribe(ListenerKind::Scroll, handler)
    }

    fn on_pointer_down(&self, handler: EventHandler) -> Subscription {
        self.subscribe(ListenerKind::PointerDown, handler)
    }

    fn on_key_up(&self, handler: EventHandler) -> Subscription {
        self.subscribe(ListenerKind::KeyUp, handler)
    }
}

/// Live reference to a mounted trigger element.
pub trait Anchor {
    /// DOM id of the trigger element.
    fn element_id(&self) -> &str;

    /// Current bounding rect, `None` if the element is not measurable yet.
    fn bounding_rect(&self) -> Option<Rect>;
}
