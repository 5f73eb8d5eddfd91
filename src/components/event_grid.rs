//! Event-type cards.

use dioxus::prelude::*;
use gearhire_core::Region;
use gearhire_ui::{use_popover, ActionMenu, PopoverTrigger};

use crate::catalog::EVENT_TYPES;

#[component]
pub fn EventGrid() -> Element {
    use_popover(Region::EventGrid);

    rsx! {
        section { class: "event-grid",
            h2 { class: "section-header", "Plan by occasion" }
            div { class: "card-grid",
                for event in EVENT_TYPES.iter() {
                    article { key: "{event.slug}", class: "event-card",
                        h3 { class: "card-title", "{event.title}" }
                        p { class: "card-body", "{event.blurb}" }
                        PopoverTrigger {
                            owner: event.slug.to_string(),
                            title: event.title.to_string(),
                            aria_label: format!("Plan a {}", event.title),
                            class: "btn-outline".to_string(),
                            "Plan this event"
                        }
                    }
                }
            }
            ActionMenu {}
        }
    }
}
