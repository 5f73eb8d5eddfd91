//! Product cards, each with an overflow trigger.

use dioxus::prelude::*;
use gearhire_core::Region;
use gearhire_ui::{use_popover, ActionMenu, PopoverTrigger};

use crate::app::Route;
use crate::catalog::PRODUCTS;

#[component]
pub fn ProductGrid() -> Element {
    use_popover(Region::ProductGrid);

    rsx! {
        section { class: "product-grid",
            h2 { class: "section-header", "Popular rentals" }
            div { class: "card-grid",
                for product in PRODUCTS.iter() {
                    article { key: "{product.slug}", class: "product-card",
                        div { class: "card-header",
                            span { class: "card-category", "{product.category}" }
                            PopoverTrigger {
                                owner: product.slug.to_string(),
                                title: product.title.to_string(),
                                aria_label: format!("Options for {}", product.title),
                                class: "icon-btn".to_string(),
                                "\u{22EF}"
                            }
                        }
                        Link {
                            class: "card-title",
                            to: Route::CatalogDetail { slug: product.slug.to_string() },
                            "{product.title}"
                        }
                        p { class: "card-rate", "${product.daily_rate} / day" }
                    }
                }
            }
            ActionMenu {}
        }
    }
}
