//! Site footer.

use dioxus::prelude::*;
use gearhire_core::Region;
use gearhire_ui::{use_popover, ActionMenu, PopoverTrigger};

use crate::context::use_business_name;

#[component]
pub fn Footer() -> Element {
    use_popover(Region::Footer);
    let business = use_business_name();

    rsx! {
        footer { class: "site-footer",
            p { class: "footer-brand", "{business}" }
            p { class: "footer-note", "Delivery and setup included within 30 km." }
            PopoverTrigger {
                owner: "contact".to_string(),
                aria_label: "Contact options".to_string(),
                class: "btn-ghost".to_string(),
                "Get in touch"
            }
            ActionMenu {}
        }
    }
}
