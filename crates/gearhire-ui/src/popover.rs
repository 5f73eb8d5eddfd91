//! Hooks wiring [`PopoverController`] into the Dioxus component tree.
//!
//! ## Usage
//!
//! ```ignore
//! // In App
//! use_popover_env_provider(config);
//!
//! // In a region component
//! use_popover(Region::ProductGrid);
//! rsx! {
//!     PopoverTrigger { owner: "tent", title: "Tent 10x20", aria_label: "Tent options", "..." }
//!     ActionMenu {}
//! }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use gearhire_core::{Navigator, OwnerId, PopoverController, PopoverState, Rect, Region, SiteConfig, Size};

use crate::navigator::SystemNavigator;
use crate::viewport::{BridgeMessage, DomViewport, BRIDGE_SCRIPT};

/// Viewport assumed until the bridge script reports the real one.
pub const FALLBACK_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Shared by every region in the window.
#[derive(Clone)]
pub struct PopoverEnv {
    pub viewport: DomViewport,
    pub config: Rc<SiteConfig>,
    pub navigator: Rc<dyn Navigator>,
}

/// Start the viewport bridge and provide [`PopoverEnv`] to descendants.
///
/// Call once, from the root component.
pub fn use_popover_env_provider(config: SiteConfig) -> PopoverEnv {
    use_context_provider(move || {
        let eval = document::eval(BRIDGE_SCRIPT);
        let viewport = DomViewport::new(FALLBACK_VIEWPORT, move |command| {
            if let Err(e) = eval.send(command) {
                tracing::warn!(error = ?e, "Viewport bridge command dropped");
            }
        });

        let receiver = viewport.clone();
        spawn(async move {
            let mut eval = eval;
            loop {
                match eval.recv::<BridgeMessage>().await {
                    Ok(message) => receiver.receive(message),
                    Err(e) => {
                        tracing::warn!(error = ?e, "Viewport bridge closed");
                        break;
                    }
                }
            }
        });

        tracing::debug!(business = %config.business_name, "Popover environment ready");
        PopoverEnv {
            viewport,
            config: Rc::new(config),
            navigator: Rc::new(SystemNavigator),
        }
    })
}

/// One region's popover as seen by its components.
///
/// Cheap to clone. Reading state through [`RegionPopover::state`] subscribes
/// the calling component to open/close/reflow changes.
#[derive(Clone, PartialEq)]
pub struct RegionPopover {
    pub controller: PopoverController<DomViewport>,
    viewport: DomViewport,
    revision: Signal<u64>,
}

impl RegionPopover {
    pub fn state(&self) -> PopoverState {
        let _ = self.revision.read();
        self.controller.state()
    }

    pub fn region(&self) -> Region {
        self.controller.region()
    }

    /// DOM id used for the trigger button of `owner`.
    pub fn trigger_element_id(&self, owner: &OwnerId) -> String {
        trigger_element_id(self.region(), owner)
    }

    pub fn register(&self, owner: &OwnerId) {
        let element_id = self.trigger_element_id(owner);
        self.controller
            .register_trigger(owner.clone(), Rc::new(self.viewport.anchor(element_id)));
    }

    pub fn unregister(&self, owner: &OwnerId) {
        self.controller.unregister_trigger(owner);
        self.viewport.forget_rect(&self.trigger_element_id(owner));
    }

    pub fn record_rect(&self, owner: &OwnerId, rect: Rect) {
        self.viewport.record_rect(&self.trigger_element_id(owner), rect);
    }

    /// Run menu entry `index`; errors are logged.
    pub fn select(&self, index: usize) {
        if let Err(e) = self.controller.select_action(index) {
            tracing::error!(region = %self.region(), error = %e, "Popover action rejected");
        }
    }

    pub fn close(&self) {
        self.controller.close();
    }
}

pub fn trigger_element_id(region: Region, owner: &OwnerId) -> String {
    format!("trigger-{}-{}", region.slug(), owner)
}

/// Create the controller for `region` and provide it to descendants.
///
/// The controller is unmounted, and its listeners released, when the
/// calling component is dropped.
pub fn use_popover(region: Region) -> RegionPopover {
    let env = use_context::<PopoverEnv>();
    let revision = use_signal(|| 0u64);

    let popover = use_context_provider(move || {
        let controller = PopoverController::new(
            region,
            env.viewport.clone(),
            env.config.region(region),
            env.navigator.clone(),
        );
        controller.on_change(move |state| {
            let mut revision = revision;
            *revision.write() += 1;
            tracing::trace!(region = %region, open = state.is_open(), "Popover changed");
        });
        RegionPopover {
            controller,
            viewport: env.viewport,
            revision,
        }
    });

    let teardown = popover.controller.clone();
    use_drop(move || teardown.unmount());
    popover
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_ids_are_namespaced_by_region() {
        let owner = OwnerId::from("tent-10x20");
        assert_eq!(trigger_element_id(Region::ProductGrid, &owner), "trigger-product-grid-tent-10x20");
        assert_eq!(trigger_element_id(Region::Footer, &owner), "trigger-footer-tent-10x20");
    }
}
