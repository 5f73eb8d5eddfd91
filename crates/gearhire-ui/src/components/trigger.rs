//! Popover Trigger Component
//!
//! A button that toggles its region's popover. Must be rendered below a
//! component that called [`crate::use_popover`].

use std::rc::Rc;

use dioxus::prelude::*;
use gearhire_core::{ActionContext, OwnerId, Rect};

use crate::popover::RegionPopover;

/// Properties for the PopoverTrigger component
#[derive(Clone, PartialEq, Props)]
pub struct PopoverTriggerProps {
    /// Unique within the region; must not change while mounted
    pub owner: String,
    /// Item title substituted into messaging templates
    #[props(default)]
    pub title: String,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

fn to_rect(rect: dioxus::html::geometry::PixelsRect) -> Rect {
    Rect::from_origin_size(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

async fn measure(popover: &RegionPopover, owner: &OwnerId, element: Option<Rc<MountedData>>) {
    let Some(element) = element else {
        return;
    };
    match element.get_client_rect().await {
        Ok(rect) => popover.record_rect(owner, to_rect(rect)),
        Err(e) => tracing::debug!(owner = %owner, error = ?e, "Trigger not measurable"),
    }
}

/// Button that opens the region's action menu
///
/// Registers itself with the region's controller on creation and
/// unregisters on drop, which closes the popover if this trigger owns it.
/// Each click re-measures the button before toggling, so the placement uses
/// its live position.
#[component]
pub fn PopoverTrigger(props: PopoverTriggerProps) -> Element {
    let popover = use_context::<RegionPopover>();
    let owner = use_hook(|| OwnerId::new(props.owner.clone()));
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_hook(|| popover.register(&owner));
    use_drop({
        let popover = popover.clone();
        let owner = owner.clone();
        move || popover.unregister(&owner)
    });

    let element_id = popover.trigger_element_id(&owner);
    let popover_id = popover.region().popover_element_id();
    let expanded = popover.state().is_open_for(&owner);
    let class = match props.class.as_deref() {
        Some(extra) => format!("popover-trigger {}", extra),
        None => "popover-trigger".to_string(),
    };

    let on_mounted = {
        let popover = popover.clone();
        let owner = owner.clone();
        move |evt: MountedEvent| {
            let popover = popover.clone();
            let owner = owner.clone();
            async move {
                let element = evt.data();
                mounted.set(Some(element.clone()));
                measure(&popover, &owner, Some(element)).await;
            }
        }
    };

    let title = props.title.clone();
    let on_click = move |_: MouseEvent| {
        let popover = popover.clone();
        let owner = owner.clone();
        let context = ActionContext::titled(title.clone());
        async move {
            measure(&popover, &owner, mounted()).await;
            popover.controller.activate_with(owner, context);
        }
    };

    rsx! {
        button {
            id: "{element_id}",
            class: "{class}",
            r#type: "button",
            "data-popover-anchor": "true",
            "aria-haspopup": "menu",
            "aria-expanded": if expanded { "true" } else { "false" },
            "aria-controls": "{popover_id}",
            "aria-label": "{props.aria_label}",
            onmounted: on_mounted,
            onclick: on_click,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::html::geometry::euclid::{Point2D, Size2D};
    use dioxus::html::geometry::PixelsRect;

    #[test]
    fn client_rect_converts_to_edges() {
        let rect = PixelsRect::new(Point2D::new(10.0, 20.0), Size2D::new(40.0, 30.0));
        assert_eq!(to_rect(rect), Rect::new(20.0, 10.0, 50.0, 50.0));
    }
}
