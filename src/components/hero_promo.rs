//! Landing page banner.

use dioxus::prelude::*;
use gearhire_core::Region;
use gearhire_ui::{use_popover, ActionMenu, PopoverTrigger};

/// Headline, pitch and a single quote trigger
#[component]
pub fn HeroPromo() -> Element {
    use_popover(Region::Hero);

    rsx! {
        section { class: "hero-promo",
            h1 { class: "hero-title", "Everything your event needs, delivered" }
            p { class: "hero-pitch",
                "Tents, furniture, lighting and staging. We set up before your guests arrive and take it all away after."
            }
            PopoverTrigger {
                owner: "promo".to_string(),
                aria_label: "Quote options".to_string(),
                class: "btn-primary".to_string(),
                "Request a quote"
            }
            ActionMenu {}
        }
    }
}
