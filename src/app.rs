use dioxus::prelude::*;
use gearhire_ui::use_popover_env_provider;

use crate::context::get_site_config;
use crate::pages::{CatalogDetail, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page: hero promo, event types, product grid
/// - `/catalog/:slug` - One rental item
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/catalog/:slug")]
    CatalogDetail { slug: String },
}

/// Root application component.
///
/// Starts the viewport bridge every popover region shares, then routes.
#[component]
pub fn App() -> Element {
    use_popover_env_provider(get_site_config());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
