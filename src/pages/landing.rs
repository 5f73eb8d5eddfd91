//! Landing page: promo banner, occasions and the product grid.

use dioxus::prelude::*;

use crate::components::{EventGrid, Footer, HeroPromo, Navbar, ProductGrid};

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page landing-page",
            Navbar {}
            main { class: "page-content",
                HeroPromo {}
                EventGrid {}
                ProductGrid {}
            }
            Footer {}
        }
    }
}
