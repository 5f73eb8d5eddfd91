//! Dismissal coordinator: outside pointer-down and Escape close the popover.

use std::rc::Rc;

use crate::port::{PointerTarget, Subscription, ViewportEvent, ViewportPort};

pub const ESCAPE_KEY: &str = "Escape";

/// Something that may dismiss the open popover.
#[derive(Debug, Clone, PartialEq)]
pub enum DismissSignal {
    /// Pointer went down somewhere; the owner decides whether it was outside.
    PointerDown(PointerTarget),
    /// Escape key released.
    Escape,
}

/// Pointer-down and key-up subscriptions, held only while open.
#[derive(Debug)]
pub struct DismissalListeners {
    _pointer_down: Subscription,
    _key_up: Subscription,
}

/// Attach the document-level listeners, forwarding relevant events to `handler`.
pub fn attach<P>(port: &P, handler: Rc<dyn Fn(DismissSignal)>) -> DismissalListeners
where
    P: ViewportPort + ?Sized,
{
    let on_pointer = handler.clone();
    let pointer_down = port.on_pointer_down(Rc::new(move |event| {
        if let ViewportEvent::PointerDown(target) = event {
            on_pointer(DismissSignal::PointerDown(target.clone()));
        }
    }));

    let key_up = port.on_key_up(Rc::new(move |event| {
        if let ViewportEvent::KeyUp { key } = event {
            if is_escape(key) {
                handler(DismissSignal::Escape);
            }
        }
    }));

    DismissalListeners {
        _pointer_down: pointer_down,
        _key_up: key_up,
    }
}

pub fn is_escape(key: &str) -> bool {
    key == ESCAPE_KEY
}

/// A pointer-down is outside unless it landed in the popover panel or in the
/// active trigger's subtree.
pub fn is_outside(target: &PointerTarget, popover_element_id: &str, trigger_element_id: Option<&str>) -> bool {
    if target.is_within(popover_element_id) {
        return false;
    }
    match trigger_element_id {
        Some(trigger) => !target.is_within(trigger),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessViewport;
    use crate::port::ListenerKind;
    use crate::types::Size;
    use std::cell::RefCell;

    #[test]
    fn outside_detection() {
        let inside_popover = PointerTarget::new(["action-0", "popover-hero", "root"]);
        let on_trigger = PointerTarget::new(["trigger-hero-icon", "trigger-hero", "root"]);
        let elsewhere = PointerTarget::new(["main", "root"]);

        assert!(!is_outside(&inside_popover, "popover-hero", Some("trigger-hero")));
        assert!(!is_outside(&on_trigger, "popover-hero", Some("trigger-hero")));
        assert!(is_outside(&elsewhere, "popover-hero", Some("trigger-hero")));
        assert!(is_outside(&on_trigger, "popover-hero", None));
    }

    #[test]
    fn only_escape_is_forwarded() {
        let port = HeadlessViewport::new(Size::new(800.0, 600.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let listeners = attach(&port, Rc::new(move |signal| sink.borrow_mut().push(signal)));

        port.key_up("Enter");
        port.key_up("Escape");
        port.pointer_down(["main"]);

        assert_eq!(
            *seen.borrow(),
            vec![
                DismissSignal::Escape,
                DismissSignal::PointerDown(PointerTarget::new(["main"])),
            ]
        );

        drop(listeners);
        assert_eq!(port.listener_count(ListenerKind::PointerDown), 0);
        assert_eq!(port.listener_count(ListenerKind::KeyUp), 0);
    }
}
