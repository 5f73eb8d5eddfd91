//! Catalog detail page for a single rental item.

use dioxus::prelude::*;
use gearhire_core::Region;
use gearhire_ui::{use_popover, ActionMenu, PopoverTrigger};

use crate::app::Route;
use crate::catalog::{find_product, Product};
use crate::components::{Footer, Navbar};

/// Detail page routed at `/catalog/:slug`.
///
/// Unknown slugs render a short not-found notice instead of the item.
#[component]
pub fn CatalogDetail(slug: String) -> Element {
    let product = find_product(&slug);
    if product.is_none() {
        tracing::debug!(slug = %slug, "No catalog item for slug");
    }

    let body = match product {
        // Keyed on slug so moving between items remounts the region and its
        // trigger owner.
        Some(product) => rsx! { ProductDetail { key: "{slug}", product: *product } },
        None => rsx! {
            section { class: "not-found",
                h1 { "Item not found" }
                p { "We couldn't find \"{slug}\" in the catalog." }
                Link { class: "btn-outline", to: Route::Landing {}, "Back to catalog" }
            }
        },
    };

    rsx! {
        div { class: "page catalog-detail-page",
            Navbar {}
            main { class: "page-content",
                {body}
            }
            Footer {}
        }
    }
}

#[component]
fn ProductDetail(product: Product) -> Element {
    use_popover(Region::CatalogDetail);

    rsx! {
        section { class: "catalog-detail",
            span { class: "card-category", "{product.category}" }
            h1 { class: "detail-title", "{product.title}" }
            p { class: "detail-summary", "{product.summary}" }
            p { class: "card-rate", "${product.daily_rate} / day" }
            PopoverTrigger {
                owner: product.slug.to_string(),
                title: product.title.to_string(),
                aria_label: format!("Book {}", product.title),
                class: "btn-primary".to_string(),
                "Book this item"
            }
            ActionMenu {}
        }
    }
}
