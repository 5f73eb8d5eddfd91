//! Top navigation bar with its own contact popover.

use dioxus::prelude::*;
use gearhire_core::Region;
use gearhire_ui::{use_popover, ActionMenu, PopoverTrigger};

use crate::app::Route;
use crate::context::use_business_name;

#[component]
pub fn Navbar() -> Element {
    use_popover(Region::Navbar);
    let business = use_business_name();

    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Landing {}, "{business}" }
            div { class: "nav-links",
                Link { class: "nav-link", to: Route::Landing {}, "Catalog" }
                PopoverTrigger {
                    owner: "contact".to_string(),
                    aria_label: "Contact options".to_string(),
                    class: "nav-contact".to_string(),
                    "Contact"
                }
            }
            ActionMenu {}
        }
    }
}
