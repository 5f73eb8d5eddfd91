//! Button Components
//!
//! - Primary: solid call-to-action
//! - Outline: secondary actions on cards
//! - MenuItem: full-width entry inside a popover menu
//! - Ghost: low-emphasis links in the navbar and footer

use dioxus::prelude::*;

/// Button style variants
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    /// Entry in a popover action menu
    MenuItem,
    Ghost,
}

impl ButtonVariant {
    /// Stylesheet class for the variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::MenuItem => "btn-menu-item",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Props for [`Button`]
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// ARIA role override, e.g. `menuitem`
    #[props(default)]
    pub role: Option<String>,
    /// Extra classes appended after the variant class
    #[props(default)]
    pub class: Option<String>,
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::MenuItem,
///         role: "menuitem",
///         onclick: move |_| popover.select(0),
///         "Ask availability"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let classes = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{classes}",
            r#type: "button",
            role: props.role.clone(),
            onclick: move |_| {
                if let Some(on_press) = &props.onclick {
                    on_press.call(());
                }
            },
            {props.children}
        }
    }
}

/// Small × button that dismisses a popover
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    let classes = join_classes("icon-btn close-btn", class.as_deref());

    rsx! {
        button {
            class: "{classes}",
            r#type: "button",
            "aria-label": "Close menu",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}
