//! Action Menu Component
//!
//! The floating panel for one region. Rendered only while the region's
//! popover is open, at the placement the controller resolved.

use dioxus::prelude::*;
use gearhire_core::{ActionIcon, Placement, Size};

use super::button::{Button, ButtonVariant, CloseButton};
use crate::popover::RegionPopover;

/// Glyph shown before an action label
pub fn icon_glyph(icon: ActionIcon) -> &'static str {
    match icon {
        ActionIcon::Message => "\u{1F4AC}",
        ActionIcon::ExternalLink => "\u{2197}",
    }
}

/// Inline style pinning the panel to its fixed-position placement.
pub fn panel_style(placement: Placement, size: Size) -> String {
    format!(
        "position: fixed; top: {}px; left: {}px; min-width: {}px;",
        placement.top, placement.left, size.width
    )
}

/// Floating action menu for the enclosing region
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     section { class: "product-grid",
///         for item in items { ProductCard { item } }
///         ActionMenu {}
///     }
/// }
/// ```
#[component]
pub fn ActionMenu() -> Element {
    let popover = use_context::<RegionPopover>();
    let state = popover.state();
    let Some(placement) = state.placement else {
        return rsx! {};
    };

    let popover_id = popover.region().popover_element_id();
    let style = panel_style(placement, popover.controller.popover_size());
    let side = if placement.place_above { "above" } else { "below" };
    let actions = popover.controller.actions();
    let close = popover.clone();

    rsx! {
        div {
            id: "{popover_id}",
            class: "popover-menu",
            role: "menu",
            "data-placement": "{side}",
            style: "{style}",
            div { class: "popover-menu-header",
                CloseButton { onclick: move |_| close.close() }
            }
            for (index, action) in actions.into_iter().enumerate() {
                {
                    let popover = popover.clone();
                    rsx! {
                        Button {
                            key: "{index}",
                            variant: ButtonVariant::MenuItem,
                            role: "menuitem".to_string(),
                            onclick: move |_| popover.select(index),
                            span { class: "menu-icon", "{icon_glyph(action.icon)}" }
                            span { class: "menu-label", "{action.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_uses_fixed_coordinates() {
        let placement = Placement {
            top: 650.0,
            left: 980.0,
            place_above: true,
        };
        assert_eq!(
            panel_style(placement, Size::new(220.0, 92.0)),
            "position: fixed; top: 650px; left: 980px; min-width: 220px;"
        );
    }

    #[test]
    fn every_icon_has_a_glyph() {
        assert!(!icon_glyph(ActionIcon::Message).is_empty());
        assert!(!icon_glyph(ActionIcon::ExternalLink).is_empty());
    }
}
