//! Popover controller: one per page region.
//!
//! Ties the visibility state machine, geometry resolver, dismissal
//! coordinator, reflow watcher and action menu together. Every open goes
//! through [`Inner::open`], which attaches all four global listeners; every
//! close goes through [`Inner::release`], which drops them. Dropping the last
//! controller handle drops them as well.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use url::Url;

use crate::actions::{ActionContext, ActionSpec, Navigator};
use crate::anchors::TriggerRegistry;
use crate::config::RegionSettings;
use crate::dismissal::{self, DismissSignal, DismissalListeners};
use crate::error::{CoreResult, GearError};
use crate::geometry;
use crate::port::{Anchor, ViewportPort};
use crate::reflow::{self, ReflowListeners};
use crate::state::{Transition, VisibilityMachine};
use crate::types::{OwnerId, Placement, PopoverState, Region, Size};

/// Why a popover closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Same trigger activated again
    Toggled,
    /// Host called [`PopoverController::close`]
    Requested,
    /// Pointer-down outside the popover and its trigger
    OutsidePointer,
    Escape,
    ActionSelected,
    /// The active trigger unregistered
    TriggerRemoved,
    /// The hosting region unmounted
    Unmounted,
}

/// Result of [`PopoverController::select_action`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Popover was closed; nothing ran.
    Ignored,
    /// The URL was handed to the navigator.
    Opened(Url),
    /// Building or opening the URL failed; the popover closed anyway.
    Failed(String),
}

type ChangeCallback = Rc<dyn Fn(&PopoverState)>;

/// All four global listeners. Present iff the popover is open.
struct ListenerSet {
    _dismissal: DismissalListeners,
    _reflow: ReflowListeners,
}

struct Inner<P: ViewportPort + 'static> {
    region: Region,
    port: P,
    settings: RegionSettings,
    popover_element_id: String,
    navigator: Rc<dyn Navigator>,
    triggers: TriggerRegistry,
    machine: VisibilityMachine,
    placement: Option<Placement>,
    context: ActionContext,
    listeners: Option<ListenerSet>,
    on_change: Option<ChangeCallback>,
}

impl<P: ViewportPort + 'static> Inner<P> {
    fn state(&self) -> PopoverState {
        PopoverState {
            active_owner: self.machine.active().cloned(),
            placement: self.placement,
        }
    }

    fn compute_placement(&self, id: &OwnerId) -> Placement {
        let viewport = self.port.viewport_size();
        match self.triggers.measure(id) {
            Ok(rect) => geometry::resolve(rect, self.settings.popover, viewport),
            Err(e) => {
                tracing::debug!(region = %self.region, error = %e, "Using centered fallback placement");
                geometry::centered(self.settings.popover, viewport)
            }
        }
    }

    /// Enter or switch to `Open(id)`.
    fn open(&mut self, id: &OwnerId, context: ActionContext, this: &Weak<RefCell<Inner<P>>>) {
        let placement = self.compute_placement(id);
        self.placement = Some(placement);
        self.context = context;

        if self.listeners.is_none() {
            self.listeners = Some(ListenerSet {
                _dismissal: dismissal::attach(&self.port, dismiss_handler(this.clone())),
                _reflow: reflow::attach(&self.port, reflow_handler(this.clone())),
            });
        }

        tracing::debug!(
            region = %self.region,
            owner = %id,
            top = placement.top,
            left = placement.left,
            place_above = placement.place_above,
            "Popover open"
        );
    }

    fn close(&mut self, reason: CloseReason) -> Option<OwnerId> {
        let previous = self.machine.close();
        if previous.is_some() {
            self.release(reason, previous.as_ref());
        }
        previous
    }

    /// Clear everything tied to the open session and detach listeners.
    fn release(&mut self, reason: CloseReason, owner: Option<&OwnerId>) {
        self.placement = None;
        self.context = ActionContext::default();
        self.listeners = None;

        tracing::debug!(
            region = %self.region,
            owner = owner.map(|o| o.as_str()).unwrap_or(""),
            reason = ?reason,
            "Popover closed"
        );
    }

    fn reflow(&mut self) -> bool {
        let Some(id) = self.machine.active().cloned() else {
            return false;
        };
        let placement = self.compute_placement(&id);
        if self.placement == Some(placement) {
            return false;
        }
        if self.placement.map(|p| p.place_above) != Some(placement.place_above) {
            tracing::trace!(region = %self.region, owner = %id, place_above = placement.place_above, "Placement flipped");
        }
        self.placement = Some(placement);
        true
    }

    fn check_listener_pairing(&self) {
        debug_assert_eq!(
            self.machine.is_open(),
            self.listeners.is_some(),
            "listeners must exist iff the popover is open"
        );
    }
}

fn dismiss_handler<P: ViewportPort + 'static>(this: Weak<RefCell<Inner<P>>>) -> Rc<dyn Fn(DismissSignal)> {
    Rc::new(move |signal| {
        let Some(inner) = this.upgrade() else {
            return;
        };
        let closed = {
            let Ok(mut guard) = inner.try_borrow_mut() else {
                tracing::warn!("Dismissal event delivered re-entrantly, skipped");
                return;
            };
            let reason = match signal {
                DismissSignal::Escape => Some(CloseReason::Escape),
                DismissSignal::PointerDown(target) => {
                    let trigger = guard
                        .machine
                        .active()
                        .and_then(|id| guard.triggers.element_id(id));
                    dismissal::is_outside(&target, &guard.popover_element_id, trigger)
                        .then_some(CloseReason::OutsidePointer)
                }
            };
            let closed = reason.and_then(|reason| guard.close(reason)).is_some();
            guard.check_listener_pairing();
            closed
        };
        if closed {
            notify(&inner);
        }
    })
}

fn reflow_handler<P: ViewportPort + 'static>(this: Weak<RefCell<Inner<P>>>) -> Rc<dyn Fn()> {
    Rc::new(move || {
        let Some(inner) = this.upgrade() else {
            return;
        };
        let changed = match inner.try_borrow_mut() {
            Ok(mut guard) => guard.reflow(),
            Err(_) => {
                tracing::warn!("Reflow event delivered re-entrantly, skipped");
                return;
            }
        };
        if changed {
            notify(&inner);
        }
    })
}

fn notify<P: ViewportPort + 'static>(inner: &Rc<RefCell<Inner<P>>>) {
    let (callback, state) = {
        let guard = inner.borrow();
        (guard.on_change.clone(), guard.state())
    };
    if let Some(callback) = callback {
        callback(&state);
    }
}

/// Handle to one region's popover. Clones share the same state.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use gearhire_core::{
///     HeadlessAnchor, HeadlessViewport, OwnerId, PopoverController, RecordingNavigator, Rect,
///     Region, RegionSettings, Size,
/// };
///
/// let port = HeadlessViewport::new(Size::new(1280.0, 800.0));
/// let controller = PopoverController::new(
///     Region::ProductGrid,
///     port.clone(),
///     RegionSettings::defaults_for(Region::ProductGrid),
///     Rc::new(RecordingNavigator::new()),
/// );
///
/// let tent = OwnerId::from("tent");
/// controller.register_trigger(
///     tent.clone(),
///     Rc::new(HeadlessAnchor::new("trigger-tent", Some(Rect::new(100.0, 300.0, 340.0, 130.0)))),
/// );
///
/// controller.activate(tent.clone());
/// assert!(controller.is_open_for(&tent));
/// assert_eq!(port.total_listeners(), 4);
///
/// port.key_up("Escape");
/// assert!(!controller.is_open_for(&tent));
/// assert_eq!(port.total_listeners(), 0);
/// ```
pub struct PopoverController<P: ViewportPort + 'static> {
    inner: Rc<RefCell<Inner<P>>>,
}

impl<P: ViewportPort + 'static> Clone for PopoverController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: ViewportPort + 'static> PartialEq for PopoverController<P> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P: ViewportPort + 'static> PopoverController<P> {
    pub fn new(region: Region, port: P, settings: RegionSettings, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                region,
                port,
                settings,
                popover_element_id: region.popover_element_id(),
                navigator,
                triggers: TriggerRegistry::new(),
                machine: VisibilityMachine::new(),
                placement: None,
                context: ActionContext::default(),
                listeners: None,
                on_change: None,
            })),
        }
    }

    /// Called after every state or placement change, outside any borrow.
    pub fn on_change(&self, callback: impl Fn(&PopoverState) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(callback));
    }

    pub fn register_trigger(&self, id: OwnerId, anchor: Rc<dyn Anchor>) {
        self.inner.borrow_mut().triggers.register(id, anchor);
    }

    /// Forget a trigger. Closes the popover if `id` owns it.
    pub fn unregister_trigger(&self, id: &OwnerId) {
        let closed = {
            let mut inner = self.inner.borrow_mut();
            inner.triggers.unregister(id);
            let closed = inner.machine.is_open_for(id) && inner.close(CloseReason::TriggerRemoved).is_some();
            inner.check_listener_pairing();
            closed
        };
        if closed {
            notify(&self.inner);
        }
    }

    /// Toggle `id` with an empty action context.
    pub fn activate(&self, id: OwnerId) -> Transition {
        self.activate_with(id, ActionContext::default())
    }

    /// Toggle `id`, capturing `context` for the action menu when it opens.
    pub fn activate_with(&self, id: OwnerId, context: ActionContext) -> Transition {
        let this = Rc::downgrade(&self.inner);
        let transition = {
            let mut inner = self.inner.borrow_mut();
            let transition = inner.machine.activate(id);
            match &transition {
                Transition::Opened(id) => inner.open(id, context, &this),
                Transition::Switched { from, to } => {
                    tracing::trace!(region = %inner.region, from = %from, to = %to, "Switching popover owner");
                    inner.open(to, context, &this);
                }
                Transition::Closed(id) => inner.release(CloseReason::Toggled, Some(id)),
            }
            inner.check_listener_pairing();
            transition
        };
        notify(&self.inner);
        transition
    }

    /// Force `Closed`. Returns the owner that was open.
    pub fn close(&self) -> Option<OwnerId> {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            let previous = inner.close(CloseReason::Requested);
            inner.check_listener_pairing();
            previous
        };
        if previous.is_some() {
            notify(&self.inner);
        }
        previous
    }

    /// Run the action at `index`, then close.
    ///
    /// Does nothing while closed. Navigation failures are logged, not returned.
    pub fn select_action(&self, index: usize) -> CoreResult<ActionOutcome> {
        let (action, context, navigator) = {
            let inner = self.inner.borrow();
            if !inner.machine.is_open() {
                tracing::debug!(region = %inner.region, index, "Action selected while closed, ignored");
                return Ok(ActionOutcome::Ignored);
            }
            let action = inner
                .settings
                .actions
                .get(index)
                .cloned()
                .ok_or(GearError::ActionIndex(index))?;
            (action, inner.context.clone(), inner.navigator.clone())
        };

        let outcome = match action.url(&context).and_then(|url| navigator.open_url(&url).map(|_| url)) {
            Ok(url) => {
                tracing::info!(label = %action.label, url = %url, "Opened external link");
                ActionOutcome::Opened(url)
            }
            Err(e) => {
                tracing::warn!(label = %action.label, error = %e, "External navigation failed");
                ActionOutcome::Failed(e.to_string())
            }
        };

        let closed = {
            let mut inner = self.inner.borrow_mut();
            let closed = inner.close(CloseReason::ActionSelected).is_some();
            inner.check_listener_pairing();
            closed
        };
        if closed {
            notify(&self.inner);
        }
        Ok(outcome)
    }

    /// Force-close and detach everything; the host is going away.
    pub fn unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.close(CloseReason::Unmounted);
        inner.on_change = None;
        inner.triggers = TriggerRegistry::new();
        inner.check_listener_pairing();
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().machine.is_open()
    }

    pub fn is_open_for(&self, id: &OwnerId) -> bool {
        self.inner.borrow().machine.is_open_for(id)
    }

    pub fn active_owner(&self) -> Option<OwnerId> {
        self.inner.borrow().machine.active().cloned()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.inner.borrow().placement
    }

    pub fn state(&self) -> PopoverState {
        self.inner.borrow().state()
    }

    /// Context captured at the last activation; empty while closed.
    pub fn context(&self) -> ActionContext {
        self.inner.borrow().context.clone()
    }

    pub fn actions(&self) -> Vec<ActionSpec> {
        self.inner.borrow().settings.actions.clone()
    }

    pub fn region(&self) -> Region {
        self.inner.borrow().region
    }

    pub fn popover_element_id(&self) -> String {
        self.inner.borrow().popover_element_id.clone()
    }

    pub fn popover_size(&self) -> Size {
        self.inner.borrow().settings.popover
    }

    /// Whether this controller currently holds its global listeners.
    pub fn has_listeners(&self) -> bool {
        self.inner.borrow().listeners.is_some()
    }
}

impl<P: ViewportPort + 'static> std::fmt::Debug for PopoverController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PopoverController")
            .field("region", &inner.region)
            .field("active", &inner.machine.active())
            .field("placement", &inner.placement)
            .field("triggers", &inner.triggers.len())
            .finish()
    }
}
