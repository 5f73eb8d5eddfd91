//! DOM-backed [`ViewportPort`].
//!
//! The webview runs one long-lived script ([`BRIDGE_SCRIPT`]). Rust tells it
//! which global listeners to attach or detach; it reports events back along
//! with the viewport size and the rects of every `[data-popover-anchor]`
//! element, so anchors can be read synchronously when the engine reflows.
//!
//! A DOM listener of a kind is attached only while at least one Rust
//! subscription of that kind is alive.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use gearhire_core::{
    Anchor, EventHandler, ListenerKind, PointerTarget, Rect, Size, Subscription, ViewportEvent,
    ViewportPort,
};
use serde::{Deserialize, Serialize};

/// Script evaluated once per window.
pub const BRIDGE_SCRIPT: &str = r#"
const measure = () => {
  const anchors = {};
  document.querySelectorAll("[data-popover-anchor]").forEach((el) => {
    if (!el.id) return;
    const r = el.getBoundingClientRect();
    anchors[el.id] = { top: r.top, left: r.left, right: r.right, bottom: r.bottom };
  });
  return { width: window.innerWidth, height: window.innerHeight, anchors };
};

const handlers = {
  resize: () => dioxus.send({ event: "resize", ...measure() }),
  scroll: () => dioxus.send({ event: "scroll", ...measure() }),
  pointerdown: (e) =>
    dioxus.send({
      event: "pointerdown",
      path: e.composedPath().map((n) => n.id).filter((id) => id),
    }),
  keyup: (e) => dioxus.send({ event: "keyup", key: e.key }),
};
const capture = { resize: false, scroll: true, pointerdown: false, keyup: false };

dioxus.send({ event: "ready", ...measure() });

while (true) {
  const cmd = await dioxus.recv();
  const handler = handlers[cmd.kind];
  if (!handler) continue;
  if (cmd.op === "attach") {
    window.addEventListener(cmd.kind, handler, capture[cmd.kind]);
  } else {
    window.removeEventListener(cmd.kind, handler, capture[cmd.kind]);
  }
}
"#;

/// Viewport snapshot sent with resize and scroll events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub anchors: HashMap<String, Rect>,
}

/// Message from the bridge script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum BridgeMessage {
    Ready(Measurement),
    Resize(Measurement),
    Scroll(Measurement),
    #[serde(rename = "pointerdown")]
    PointerDown { path: Vec<String> },
    #[serde(rename = "keyup")]
    KeyUp { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeOp {
    Attach,
    Detach,
}

/// Message to the bridge script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeCommand {
    pub op: BridgeOp,
    pub kind: &'static str,
}

type CommandSink = Box<dyn Fn(BridgeCommand)>;

struct DomState {
    size: Cell<Size>,
    rects: RefCell<HashMap<String, Rect>>,
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<u64, (ListenerKind, EventHandler)>>,
    sink: CommandSink,
}

impl DomState {
    fn count(&self, kind: ListenerKind) -> usize {
        self.listeners
            .borrow()
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    fn unsubscribe(&self, id: u64) {
        let removed = self.listeners.borrow_mut().remove(&id);
        if let Some((kind, _)) = removed {
            if self.count(kind) == 0 {
                tracing::trace!(kind = kind.event_name(), "Detaching DOM listener");
                (self.sink)(BridgeCommand {
                    op: BridgeOp::Detach,
                    kind: kind.event_name(),
                });
            }
        }
    }
}

/// Cloneable handle to the webview's viewport.
#[derive(Clone)]
pub struct DomViewport {
    state: Rc<DomState>,
}

impl DomViewport {
    /// `sink` delivers commands to the bridge script.
    pub fn new(initial: Size, sink: impl Fn(BridgeCommand) + 'static) -> Self {
        Self {
            state: Rc::new(DomState {
                size: Cell::new(initial),
                rects: RefCell::new(HashMap::new()),
                next_id: Cell::new(0),
                listeners: RefCell::new(BTreeMap::new()),
                sink: Box::new(sink),
            }),
        }
    }

    /// Anchor reading `element_id`'s rect from the shared cache.
    pub fn anchor(&self, element_id: impl Into<String>) -> DomAnchor {
        DomAnchor {
            element_id: element_id.into(),
            state: Rc::downgrade(&self.state),
        }
    }

    /// Store a rect measured on the Rust side (mount, click).
    pub fn record_rect(&self, element_id: &str, rect: Rect) {
        self.state
            .rects
            .borrow_mut()
            .insert(element_id.to_string(), rect);
    }

    pub fn forget_rect(&self, element_id: &str) {
        self.state.rects.borrow_mut().remove(element_id);
    }

    /// Apply one bridge message: refresh caches, then fan out to listeners.
    pub fn receive(&self, message: BridgeMessage) {
        let event = match message {
            BridgeMessage::Ready(m) => {
                self.apply(m);
                return;
            }
            BridgeMessage::Resize(m) => {
                self.apply(m);
                ViewportEvent::Resized
            }
            BridgeMessage::Scroll(m) => {
                self.apply(m);
                ViewportEvent::Scrolled
            }
            BridgeMessage::PointerDown { path } => ViewportEvent::PointerDown(PointerTarget::new(path)),
            BridgeMessage::KeyUp { key } => ViewportEvent::KeyUp { key },
        };
        self.dispatch(&event);
    }

    fn apply(&self, measurement: Measurement) {
        self.state
            .size
            .set(Size::new(measurement.width, measurement.height));
        // Anchors outside the snapshot keep their last known rect; they may
        // have been measured on click before the script saw them.
        self.state.rects.borrow_mut().extend(measurement.anchors);
    }

    fn dispatch(&self, event: &ViewportEvent) {
        let kind = event.kind();
        let targets: Vec<(u64, EventHandler)> = self
            .state
            .listeners
            .borrow()
            .iter()
            .filter(|(_, (k, _))| *k == kind)
            .map(|(id, (_, handler))| (*id, handler.clone()))
            .collect();

        for (id, handler) in targets {
            let live = self.state.listeners.borrow().contains_key(&id);
            if live {
                handler(event);
            }
        }
    }

    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.state.count(kind)
    }
}

impl ViewportPort for DomViewport {
    fn viewport_size(&self) -> Size {
        self.state.size.get()
    }

    fn subscribe(&self, kind: ListenerKind, handler: EventHandler) -> Subscription {
        let first = self.state.count(kind) == 0;
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state.listeners.borrow_mut().insert(id, (kind, handler));

        if first {
            tracing::trace!(kind = kind.event_name(), "Attaching DOM listener");
            (self.state.sink)(BridgeCommand {
                op: BridgeOp::Attach,
                kind: kind.event_name(),
            });
        }

        let weak = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.unsubscribe(id);
            }
        })
    }
}

impl PartialEq for DomViewport {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl std::fmt::Debug for DomViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomViewport")
            .field("size", &self.state.size.get())
            .field("anchors", &self.state.rects.borrow().len())
            .field("listeners", &self.state.listeners.borrow().len())
            .finish()
    }
}

/// Trigger element whose rect comes from the [`DomViewport`] cache.
#[derive(Debug, Clone)]
pub struct DomAnchor {
    element_id: String,
    state: Weak<DomState>,
}

impl Anchor for DomAnchor {
    fn element_id(&self) -> &str {
        &self.element_id
    }

    fn bounding_rect(&self) -> Option<Rect> {
        let state = self.state.upgrade()?;
        let rect = state.rects.borrow().get(&self.element_id).copied();
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn viewport() -> (DomViewport, Rc<RefCell<Vec<BridgeCommand>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let log = sent.clone();
        let viewport = DomViewport::new(Size::new(1024.0, 768.0), move |cmd| log.borrow_mut().push(cmd));
        (viewport, sent)
    }

    #[test]
    fn attaches_once_per_kind_and_detaches_with_last() {
        let (viewport, sent) = viewport();
        let a = viewport.on_scroll(Rc::new(|_| {}));
        let b = viewport.on_scroll(Rc::new(|_| {}));
        assert_eq!(sent.borrow().len(), 1);
        assert_eq!(sent.borrow()[0], BridgeCommand { op: BridgeOp::Attach, kind: "scroll" });

        drop(a);
        assert_eq!(sent.borrow().len(), 1);
        drop(b);
        assert_eq!(sent.borrow()[1], BridgeCommand { op: BridgeOp::Detach, kind: "scroll" });
        assert_eq!(viewport.listener_count(ListenerKind::Scroll), 0);
    }

    #[test]
    fn parses_bridge_messages() {
        let msg: BridgeMessage = serde_json::from_value(json!({
            "event": "resize",
            "width": 800.0,
            "height": 600.0,
            "anchors": { "trigger-a": { "top": 1.0, "left": 2.0, "right": 3.0, "bottom": 4.0 } }
        }))
        .unwrap();
        assert!(matches!(msg, BridgeMessage::Resize(ref m) if m.anchors.len() == 1));

        let msg: BridgeMessage =
            serde_json::from_value(json!({ "event": "pointerdown", "path": ["x", "y"] })).unwrap();
        assert_eq!(msg, BridgeMessage::PointerDown { path: vec!["x".into(), "y".into()] });

        let msg: BridgeMessage = serde_json::from_value(json!({ "event": "keyup", "key": "Escape" })).unwrap();
        assert_eq!(msg, BridgeMessage::KeyUp { key: "Escape".into() });
    }

    #[test]
    fn resize_refreshes_size_and_anchor_cache_before_dispatch() {
        let (viewport, _) = viewport();
        let anchor = viewport.anchor("trigger-a");
        let seen = Rc::new(RefCell::new(None));

        let probe = viewport.clone();
        let probe_anchor = anchor.clone();
        let out = seen.clone();
        let _sub = viewport.on_resize(Rc::new(move |_| {
            *out.borrow_mut() = Some((probe.viewport_size(), probe_anchor.bounding_rect()));
        }));

        let mut anchors = HashMap::new();
        anchors.insert("trigger-a".to_string(), Rect::new(10.0, 20.0, 30.0, 40.0));
        viewport.receive(BridgeMessage::Resize(Measurement {
            width: 640.0,
            height: 480.0,
            anchors,
        }));

        assert_eq!(
            *seen.borrow(),
            Some((Size::new(640.0, 480.0), Some(Rect::new(10.0, 20.0, 30.0, 40.0))))
        );
    }

    #[test]
    fn ready_updates_size_without_dispatch() {
        let (viewport, _) = viewport();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _sub = viewport.on_resize(Rc::new(move |_| counter.set(counter.get() + 1)));

        viewport.receive(BridgeMessage::Ready(Measurement {
            width: 1440.0,
            height: 900.0,
            anchors: HashMap::new(),
        }));

        assert_eq!(viewport.viewport_size(), Size::new(1440.0, 900.0));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn recorded_rect_is_visible_to_anchor() {
        let (viewport, _) = viewport();
        let anchor = viewport.anchor("trigger-b");
        assert_eq!(anchor.bounding_rect(), None);

        viewport.record_rect("trigger-b", Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(anchor.bounding_rect(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));

        viewport.forget_rect("trigger-b");
        assert_eq!(anchor.bounding_rect(), None);
    }
}
