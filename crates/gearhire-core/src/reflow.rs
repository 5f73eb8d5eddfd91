//! Reflow watcher: recompute placement on resize and scroll while open.

use std::rc::Rc;

use crate::port::{Subscription, ViewportPort};

/// Resize and capture-phase scroll subscriptions, held only while open.
#[derive(Debug)]
pub struct ReflowListeners {
    _resize: Subscription,
    _scroll: Subscription,
}

/// Attach the window-level listeners; `on_reflow` runs for every resize or scroll.
pub fn attach<P>(port: &P, on_reflow: Rc<dyn Fn()>) -> ReflowListeners
where
    P: ViewportPort + ?Sized,
{
    let on_resize = on_reflow.clone();
    let resize = port.on_resize(Rc::new(move |_| on_resize()));
    let scroll = port.on_scroll(Rc::new(move |_| on_reflow()));

    ReflowListeners {
        _resize: resize,
        _scroll: scroll,
    }
}
